// SPDX-License-Identifier: MPL-2.0
//! Per-slide view state keyed by banner identity.

use super::pan::PanOffset;
use super::zoom::ZoomFactor;
use crate::banner::BannerId;
use std::collections::HashMap;

/// Zoom and pan of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideViewState {
    pub zoom: ZoomFactor,
    pub offset: PanOffset,
}

impl SlideViewState {
    /// Steps zoom in. Offsets are left as they are.
    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    /// Steps zoom out; landing on the fitted size recentres the slide.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
        if self.zoom.is_min() {
            self.offset = PanOffset::ZERO;
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.zoom.is_min()
    }
}

/// View state of every slide. Slides never touched read as the default.
#[derive(Debug, Clone, Default)]
pub struct SlideStates {
    states: HashMap<BannerId, SlideViewState>,
}

impl SlideStates {
    #[must_use]
    pub fn get(&self, id: BannerId) -> SlideViewState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn get_mut(&mut self, id: BannerId) -> &mut SlideViewState {
        self.states.entry(id).or_default()
    }

    /// Returns every slide to zoom 1.0 and offset (0, 0).
    pub fn reset_all(&mut self) {
        self.states.clear();
    }

    /// Drops state for banners no longer in the list.
    pub fn retain(&mut self, ids: &[BannerId]) {
        self.states.retain(|id, _| ids.contains(id));
    }
}
