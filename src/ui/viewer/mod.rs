// SPDX-License-Identifier: MPL-2.0
//! Banner viewer: looping carousel plus the zoom/pan modal.

pub mod carousel_pane;
pub mod component;
pub mod modal_pane;
pub mod subcomponents;

pub use component::{Effect, Message, Settings, State, ViewEnv};
