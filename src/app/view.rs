// SPDX-License-Identifier: MPL-2.0
//! Root view: the banner viewer inside a padded window.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::viewer::ViewEnv;
use iced::widget::Container;
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let viewer = app
        .viewer
        .view(ViewEnv { i18n: &app.i18n })
        .map(Message::Viewer);

    // The modal fills the whole window; the carousel sits at the top.
    let padding = if app.viewer.is_modal_open() {
        0.0
    } else {
        spacing::LG
    };

    Container::new(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_y(alignment::Vertical::Top)
        .into()
}
