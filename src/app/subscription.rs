// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Routes uncaptured keyboard events to the viewer while the modal is open.
///
/// The carousel has no keyboard shortcuts, so nothing is routed otherwise.
pub fn create_event_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match (&event, status) {
        (event::Event::Keyboard(..), event::Status::Ignored) => {
            Some(Message::Viewer(component::Message::RawEvent(event)))
        }
        _ => None,
    })
}

/// Autoplay and transition ticks owned by the viewer.
pub fn create_viewer_subscription(viewer: &component::State) -> Subscription<Message> {
    viewer.subscription().map(Message::Viewer)
}
