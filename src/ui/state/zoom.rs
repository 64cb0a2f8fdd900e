// SPDX-License-Identifier: MPL-2.0
//! Zoom factor for the modal viewer.
//!
//! Zoom moves in fixed steps of 0.5 between 1.0 (fitted) and 3.0, so the
//! only reachable values are 1.0, 1.5, 2.0, 2.5 and 3.0.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP};

/// Zoom factor, guaranteed to be within the valid range (1.0–3.0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a zoom factor, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is shown at its fitted size.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// One step closer, saturating at the maximum.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// One step further, saturating at the minimum.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }

    /// Zoom as a whole percentage, for labels.
    #[must_use]
    pub fn as_percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fitted() {
        let zoom = ZoomFactor::default();
        assert_eq!(zoom.value(), 1.0);
        assert!(zoom.is_min());
        assert!(!zoom.is_max());
    }

    #[test]
    fn new_clamps_and_rejects_non_finite() {
        assert_eq!(ZoomFactor::new(0.2).value(), MIN_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(9.0).value(), MAX_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(f32::NAN).value(), DEFAULT_ZOOM_FACTOR);
        assert_eq!(ZoomFactor::new(f32::INFINITY).value(), DEFAULT_ZOOM_FACTOR);
    }

    #[test]
    fn stepping_walks_the_half_steps() {
        let mut zoom = ZoomFactor::default();
        let mut seen = vec![zoom.value()];
        for _ in 0..6 {
            zoom = zoom.zoom_in();
            seen.push(zoom.value());
        }
        assert_eq!(seen, vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.0, 3.0]);

        for expected in [2.5, 2.0, 1.5, 1.0, 1.0] {
            zoom = zoom.zoom_out();
            assert_eq!(zoom.value(), expected);
        }
    }

    #[test]
    fn zoom_out_at_minimum_is_noop() {
        let zoom = ZoomFactor::default().zoom_out();
        assert_eq!(zoom, ZoomFactor::default());
    }

    #[test]
    fn percent_label() {
        assert_eq!(ZoomFactor::new(2.5).as_percent(), 250);
        assert_eq!(ZoomFactor::default().as_percent(), 100);
    }
}
