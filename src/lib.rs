// SPDX-License-Identifier: MPL-2.0
//! `banner_lens` is a banner viewer built with the Iced GUI framework.
//!
//! It shows a list of promotional images as an auto-advancing, looping
//! carousel and opens any banner in a modal viewer with zoom and pan.
//! Settings live in a TOML file and the interface is localized with Fluent.

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
