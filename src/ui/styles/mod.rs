// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the banner viewer.

pub mod button;
pub mod container;
