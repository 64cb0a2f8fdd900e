// SPDX-License-Identifier: MPL-2.0
//! Test helpers.
//!
//! Re-exports the `approx` assertion macros for float comparisons.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
