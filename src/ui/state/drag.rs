// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! A drag session exists only between a press and its release (or the
//! pointer leaving the image). Positions are tracked incrementally: every
//! move is measured from the previous move, not from where the drag began.

use iced::Point;

/// Which pointer owns the session. A touch session ignores other fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Finger(u64),
}

/// An active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer: PointerKind,
    /// Pointer position at the last processed event.
    pub last: Point,
}

/// Manages the optional drag session.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    session: Option<DragSession>,
}

impl DragState {
    /// Starts a drag, replacing any session that was never ended.
    pub fn start(&mut self, pointer: PointerKind, position: Point) {
        self.session = Some(DragSession {
            pointer,
            last: position,
        });
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        self.session = None;
    }

    /// Stops the drag only if `pointer` owns it.
    pub fn stop_pointer(&mut self, pointer: PointerKind) {
        if self.owned_by(pointer) {
            self.session = None;
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    fn owned_by(&self, pointer: PointerKind) -> bool {
        self.session.is_some_and(|s| s.pointer == pointer)
    }

    /// Records a move and returns the previous position.
    ///
    /// Returns `None` when idle or when the event belongs to another pointer.
    pub fn advance(&mut self, pointer: PointerKind, position: Point) -> Option<Point> {
        let session = self.session.as_mut()?;
        if session.pointer != pointer {
            return None;
        }
        let previous = session.last;
        session.last = position;
        Some(previous)
    }
}
