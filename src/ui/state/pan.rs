// SPDX-License-Identifier: MPL-2.0
//! Pan offset state and its zoom-dependent bounds.

use super::zoom::ZoomFactor;
pub use crate::config::PAN_BOUND_PER_ZOOM;
use iced::{Point, Vector};

/// Translation applied to the zoomed image, in pixels before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Clamps both axes independently to the bound allowed at `zoom`.
    #[must_use]
    pub fn clamped(self, zoom: ZoomFactor) -> Self {
        let bound = max_offset(zoom);
        Self {
            dx: self.dx.clamp(-bound, bound),
            dy: self.dy.clamp(-bound, bound),
        }
    }

    /// Applies a pointer movement from `last` to `current`.
    ///
    /// The screen delta is divided by the zoom factor so a drag covers the
    /// same image distance at every zoom level, then the result is clamped.
    #[must_use]
    pub fn dragged(self, last: Point, current: Point, zoom: ZoomFactor) -> Self {
        let factor = zoom.value();
        Self {
            dx: self.dx + (current.x - last.x) / factor,
            dy: self.dy + (current.y - last.y) / factor,
        }
        .clamped(zoom)
    }

    #[must_use]
    pub fn as_vector(self) -> Vector {
        Vector::new(self.dx, self.dy)
    }
}

/// Largest absolute offset per axis at the given zoom: `(zoom - 1) * 200`.
#[must_use]
pub fn max_offset(zoom: ZoomFactor) -> f32 {
    ((zoom.value() - 1.0) * PAN_BOUND_PER_ZOOM).max(0.0)
}
