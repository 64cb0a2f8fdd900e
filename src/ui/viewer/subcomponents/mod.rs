// SPDX-License-Identifier: MPL-2.0
//! Sub-components of the banner viewer.

pub mod carousel;
pub mod modal;
