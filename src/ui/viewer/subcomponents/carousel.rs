// SPDX-License-Identifier: MPL-2.0
//! Carousel sub-component: autoplay, swipe navigation and tap-to-open.

use crate::config::SWIPE_THRESHOLD_PX;
use crate::ui::state::{CarouselState, PointerKind};
use crate::ui::widgets::PointerEvent;
use iced::Point;

/// A press on the carousel that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    pointer: PointerKind,
    start: Point,
    /// Slide under the pointer when the press started.
    index: usize,
    /// Set once the gesture has moved far enough to count as a swipe.
    swiped: bool,
}

/// Carousel sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub inner: CarouselState,
    gesture: Option<Gesture>,
}

/// Messages for the carousel sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Autoplay interval elapsed.
    AutoplayTick,
    /// Jump to a slide (dot indicator).
    Select(usize),
    /// Flip the manual pause flag.
    TogglePause,
    /// Pointer input on the visible slide.
    Pointer(PointerEvent),
}

/// Effects produced by carousel changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The active slide changed.
    SlideChanged(usize),
    /// The visible slide was tapped; the modal should open on it.
    Tapped(usize),
}

impl State {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            inner: CarouselState::new(len),
            gesture: None,
        }
    }

    /// Handle a carousel message.
    ///
    /// `swipe_enabled` gates swipe navigation; taps and autoplay are unaffected.
    pub fn handle(&mut self, msg: Message, swipe_enabled: bool) -> Effect {
        match msg {
            Message::AutoplayTick => {
                if self.inner.is_paused() {
                    return Effect::None;
                }
                self.advance(true)
            }
            Message::Select(index) => {
                if self.inner.select(index) {
                    Effect::SlideChanged(index)
                } else {
                    Effect::None
                }
            }
            Message::TogglePause => {
                let paused = !self.inner.is_paused();
                self.inner.set_paused(paused);
                Effect::None
            }
            Message::Pointer(event) => self.handle_pointer(event, swipe_enabled),
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent, swipe_enabled: bool) -> Effect {
        match event {
            PointerEvent::Pressed {
                pointer,
                position: Some(start),
            } => {
                if self.inner.is_empty() {
                    return Effect::None;
                }
                self.gesture = Some(Gesture {
                    pointer,
                    start,
                    index: self.inner.active_index(),
                    swiped: false,
                });
                Effect::None
            }
            PointerEvent::Moved {
                pointer,
                position: Some(position),
            } => {
                let Some(gesture) = self.gesture.as_mut() else {
                    return Effect::None;
                };
                if gesture.pointer != pointer || gesture.swiped {
                    return Effect::None;
                }
                let dx = position.x - gesture.start.x;
                if dx.abs() < SWIPE_THRESHOLD_PX {
                    return Effect::None;
                }
                // Any long drag cancels the tap, even when swiping is off.
                gesture.swiped = true;
                if !swipe_enabled {
                    return Effect::None;
                }
                // Dragging left reveals the next slide.
                self.advance(dx < 0.0)
            }
            PointerEvent::Released { pointer } => match self.gesture.take() {
                Some(gesture) if gesture.pointer == pointer && !gesture.swiped => {
                    Effect::Tapped(gesture.index)
                }
                Some(gesture) if gesture.pointer != pointer => {
                    self.gesture = Some(gesture);
                    Effect::None
                }
                _ => Effect::None,
            },
            PointerEvent::Left => {
                self.gesture = None;
                Effect::None
            }
            PointerEvent::Pressed { position: None, .. }
            | PointerEvent::Moved { position: None, .. } => Effect::None,
        }
    }

    fn advance(&mut self, forward: bool) -> Effect {
        let changed = if forward {
            self.inner.next()
        } else {
            self.inner.previous()
        };
        if changed {
            Effect::SlideChanged(self.inner.active_index())
        } else {
            Effect::None
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.inner.active_index()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.inner.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32) -> Message {
        Message::Pointer(PointerEvent::Pressed {
            pointer: PointerKind::Mouse,
            position: Some(Point::new(x, 10.0)),
        })
    }

    fn moved(x: f32) -> Message {
        Message::Pointer(PointerEvent::Moved {
            pointer: PointerKind::Mouse,
            position: Some(Point::new(x, 10.0)),
        })
    }

    fn release() -> Message {
        Message::Pointer(PointerEvent::Released {
            pointer: PointerKind::Mouse,
        })
    }

    #[test]
    fn autoplay_cycles_and_wraps() {
        let mut state = State::new(3);
        let effects: Vec<_> = (0..3)
            .map(|_| state.handle(Message::AutoplayTick, true))
            .collect();
        assert_eq!(
            effects,
            vec![
                Effect::SlideChanged(1),
                Effect::SlideChanged(2),
                Effect::SlideChanged(0)
            ]
        );
    }

    #[test]
    fn paused_carousel_ignores_autoplay() {
        let mut state = State::new(3);
        state.handle(Message::TogglePause, true);
        assert!(state.is_paused());
        assert_eq!(state.handle(Message::AutoplayTick, true), Effect::None);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = State::new(0);
        assert_eq!(state.handle(Message::AutoplayTick, true), Effect::None);
        assert_eq!(state.handle(press(10.0), true), Effect::None);
        assert_eq!(state.handle(release(), true), Effect::None);
    }

    #[test]
    fn short_press_is_a_tap_on_active_slide() {
        let mut state = State::new(3);
        state.handle(Message::Select(1), true);
        state.handle(press(100.0), true);
        state.handle(moved(110.0), true);
        assert_eq!(state.handle(release(), true), Effect::Tapped(1));
    }

    #[test]
    fn tap_opens_slide_that_was_pressed() {
        let mut state = State::new(3);
        state.handle(press(100.0), true);
        assert_eq!(
            state.handle(Message::AutoplayTick, true),
            Effect::SlideChanged(1)
        );
        assert_eq!(state.handle(release(), true), Effect::Tapped(0));
    }

    #[test]
    fn swipe_left_goes_to_next_and_right_to_previous() {
        let mut state = State::new(3);
        state.handle(press(200.0), true);
        assert_eq!(state.handle(moved(120.0), true), Effect::SlideChanged(1));
        // One slide per gesture.
        assert_eq!(state.handle(moved(0.0), true), Effect::None);
        assert_eq!(state.handle(release(), true), Effect::None);

        state.handle(press(100.0), true);
        assert_eq!(state.handle(moved(200.0), true), Effect::SlideChanged(0));
    }

    #[test]
    fn disabled_swipe_neither_navigates_nor_taps() {
        let mut state = State::new(3);
        state.handle(press(200.0), false);
        assert_eq!(state.handle(moved(50.0), false), Effect::None);
        assert_eq!(state.handle(release(), false), Effect::None);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn leaving_cancels_gesture() {
        let mut state = State::new(2);
        state.handle(press(10.0), true);
        state.handle(Message::Pointer(PointerEvent::Left), true);
        assert_eq!(state.handle(release(), true), Effect::None);
    }

    #[test]
    fn events_without_coordinates_are_ignored() {
        let mut state = State::new(2);
        let effect = state.handle(
            Message::Pointer(PointerEvent::Pressed {
                pointer: PointerKind::Finger(1),
                position: None,
            }),
            true,
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(
            state.handle(
                Message::Pointer(PointerEvent::Released {
                    pointer: PointerKind::Finger(1)
                }),
                true
            ),
            Effect::None
        );
    }
}
