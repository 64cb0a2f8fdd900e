// SPDX-License-Identifier: MPL-2.0
//! Modal sub-component: zoom buttons, drag-to-pan and slide navigation.
//!
//! The modal works on the view state of the active slide, which the
//! orchestrator passes in. Slide changes and the close reset are reported
//! as effects because they touch state owned by the orchestrator.

use crate::ui::state::{DragState, SlideViewState};
use crate::ui::widgets::PointerEvent;

/// Direction of manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Modal sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
    pub drag: DragState,
}

/// Messages for the modal sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ZoomIn,
    ZoomOut,
    Navigate(Direction),
    Pointer(PointerEvent),
}

/// Effects produced by modal changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Zoom or offset of the active slide changed.
    TransformChanged,
    /// Move to another slide.
    Navigate(Direction),
    /// The modal was closed; every slide's view state must be reset.
    Closed,
}

impl State {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.drag.stop();
    }

    /// Handle a modal message against the active slide.
    pub fn handle(&mut self, msg: Message, slide: &mut SlideViewState) -> Effect {
        if !self.visible {
            return Effect::None;
        }

        match msg {
            Message::Close => {
                self.visible = false;
                self.drag.stop();
                Effect::Closed
            }
            Message::ZoomIn => {
                let before = *slide;
                slide.zoom_in();
                changed(before, *slide)
            }
            Message::ZoomOut => {
                let before = *slide;
                slide.zoom_out();
                if !slide.is_zoomed() {
                    self.drag.stop();
                }
                changed(before, *slide)
            }
            Message::Navigate(direction) => {
                self.drag.stop();
                Effect::Navigate(direction)
            }
            Message::Pointer(event) => self.handle_pointer(event, slide),
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent, slide: &mut SlideViewState) -> Effect {
        match event {
            PointerEvent::Pressed {
                pointer,
                position: Some(position),
            } => {
                if slide.is_zoomed() {
                    self.drag.start(pointer, position);
                }
                Effect::None
            }
            PointerEvent::Moved {
                pointer,
                position: Some(position),
            } => {
                let Some(last) = self.drag.advance(pointer, position) else {
                    return Effect::None;
                };
                let before = *slide;
                slide.offset = slide.offset.dragged(last, position, slide.zoom);
                changed(before, *slide)
            }
            PointerEvent::Released { pointer } => {
                self.drag.stop_pointer(pointer);
                Effect::None
            }
            PointerEvent::Left => {
                self.drag.stop();
                Effect::None
            }
            PointerEvent::Pressed { position: None, .. }
            | PointerEvent::Moved { position: None, .. } => Effect::None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

fn changed(before: SlideViewState, after: SlideViewState) -> Effect {
    if before == after {
        Effect::None
    } else {
        Effect::TransformChanged
    }
}
