// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types for the banner viewer, kept free of widget code so the
//! zoom, pan and navigation rules can be tested on their own.

pub mod carousel;
pub mod drag;
pub mod pan;
pub mod slide;
pub mod transition;
pub mod zoom;

pub use carousel::CarouselState;
pub use drag::{DragSession, DragState, PointerKind};
pub use pan::PanOffset;
pub use slide::{SlideStates, SlideViewState};
pub use transition::{SlideAnimation, Transform, TransformTransition};
pub use zoom::ZoomFactor;
