// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step for the modal viewer
//! - **Pan**: Pan offset bound per unit of zoom
//! - **Autoplay**: Carousel auto-advance interval bounds
//! - **Transition**: Transform smoothing duration bounds
//! - **Gestures**: Carousel swipe threshold

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when a slide is first shown (1.0 = fitted size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 1.0;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Amount added or removed by one zoom in/out action.
pub const ZOOM_STEP: f32 = 0.5;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Pan bound in pixels for each unit of zoom above 1.0.
///
/// At zoom `z` the offset on each axis is limited to `±(z - 1) * PAN_BOUND_PER_ZOOM`.
pub const PAN_BOUND_PER_ZOOM: f32 = 200.0;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default carousel auto-advance interval (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;

/// Minimum carousel auto-advance interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Maximum carousel auto-advance interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of the zoom/pan transform smoothing (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Minimum transition duration (0 disables smoothing).
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 1000;

/// Duration of the carousel slide animation (in milliseconds).
pub const SLIDE_TRANSITION_MS: u64 = 500;

/// Frame tick used while a transition is running (~60 FPS).
pub const TRANSITION_FRAME_MS: u64 = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance (in pixels) a carousel drag must cover to change slides.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_FACTOR <= DEFAULT_ZOOM_FACTOR);
    assert!(DEFAULT_ZOOM_FACTOR <= MAX_ZOOM_FACTOR);
    assert!(ZOOM_STEP > 0.0);
    assert!(PAN_BOUND_PER_ZOOM > 0.0);

    assert!(MIN_AUTOPLAY_INTERVAL_MS <= DEFAULT_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    assert!(MIN_TRANSITION_MS <= DEFAULT_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(TRANSITION_FRAME_MS > 0);
    assert!(SLIDE_TRANSITION_MS > TRANSITION_FRAME_MS);

    assert!(SWIPE_THRESHOLD_PX > 0.0);
};
