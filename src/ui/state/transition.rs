// SPDX-License-Identifier: MPL-2.0
//! Smoothing of the rendered zoom/pan transform.
//!
//! The stored slide state changes instantly; what is drawn eases from the
//! previously drawn transform to the new one over a short duration.

use super::pan::PanOffset;
use super::slide::SlideViewState;
use std::time::{Duration, Instant};

/// The transform the renderer applies: `scale(zoom) translate(offset)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: PanOffset,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: PanOffset::ZERO,
    };

    fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            scale: mix(self.scale, to.scale),
            offset: PanOffset::new(
                mix(self.offset.dx, to.offset.dx),
                mix(self.offset.dy, to.offset.dy),
            ),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<SlideViewState> for Transform {
    fn from(state: SlideViewState) -> Self {
        Self {
            scale: state.zoom.value(),
            offset: state.offset,
        }
    }
}

/// Eases between two transforms.
#[derive(Debug, Clone)]
pub struct TransformTransition {
    from: Transform,
    to: Transform,
    started: Instant,
    duration: Duration,
}

impl TransformTransition {
    /// A settled transition showing `transform`.
    #[must_use]
    pub fn settled(transform: Transform, now: Instant) -> Self {
        Self {
            from: transform,
            to: transform,
            started: now,
            duration: Duration::ZERO,
        }
    }

    /// Retargets to `target`, starting from whatever is drawn at `now`.
    pub fn retarget(&mut self, target: Transform, now: Instant, duration: Duration) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started = now;
        self.duration = duration;
    }

    /// Jumps straight to `target` (used when the slide changes).
    pub fn jump(&mut self, target: Transform, now: Instant) {
        *self = Self::settled(target, now);
    }

    #[must_use]
    pub fn target(&self) -> Transform {
        self.to
    }

    /// Transform to draw at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Transform {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(progress))
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl Default for TransformTransition {
    fn default() -> Self {
        Self::settled(Transform::IDENTITY, Instant::now())
    }
}

/// Carousel slide from one banner to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    /// Index of the banner sliding out.
    pub from: usize,
    pub forward: bool,
    started: Instant,
    duration: Duration,
}

impl SlideAnimation {
    #[must_use]
    pub fn new(from: usize, forward: bool, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            forward,
            started: now,
            duration,
        }
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        ease_out_cubic((elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
