// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Banner carousel and zoom/pan modal
//! - [`state`] - Plain view state (zoom, pan, drag, per-slide records, transitions)
//! - [`widgets`] - Custom Iced widgets (banner canvas)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod viewer;
pub mod widgets;
