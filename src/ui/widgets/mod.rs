// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod banner_canvas;

pub use banner_canvas::{BannerCanvas, Fit, PointerEvent, Slide};
