// SPDX-License-Identifier: MPL-2.0
//! Full-window modal: the active banner with zoom, pan and navigation controls.

use super::component::Message;
use super::subcomponents::modal::{self, Direction};
use crate::banner::Banner;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Transform, ZoomFactor};
use crate::ui::styles;
use crate::ui::widgets::banner_canvas::Cursor;
use crate::ui::widgets::{BannerCanvas, Fit};
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub struct ViewModel<'a> {
    pub i18n: &'a I18n,
    pub banner: &'a Banner,
    pub index: usize,
    pub total: usize,
    pub zoom: ZoomFactor,
    /// Transform sampled from the running transition.
    pub transform: Transform,
    pub dragging: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let i18n = model.i18n;

    let cursor = if model.dragging {
        Cursor::Grabbing
    } else if model.zoom.is_min() {
        Cursor::Idle
    } else {
        Cursor::Grab
    };

    let canvas = BannerCanvas::new(model.banner, Fit::Contain)
        .transform(model.transform)
        .cursor(cursor)
        .view()
        .map(|event| Message::Modal(modal::Message::Pointer(event)));

    let title = Text::new(i18n.tr_with_args(
        "carousel-slide-label",
        &[
            ("index", (model.index + 1).to_string()),
            ("total", model.total.to_string()),
        ],
    ))
    .size(typography::TITLE_MD);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(control(
            i18n,
            "✕",
            "modal-close",
            Some(modal::Message::Close),
        ));

    let body = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(control(
            i18n,
            "‹",
            "modal-previous",
            Some(modal::Message::Navigate(Direction::Previous)),
        ))
        .push(
            Container::new(canvas)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true),
        )
        .push(control(
            i18n,
            "›",
            "modal-next",
            Some(modal::Message::Navigate(Direction::Next)),
        ));

    let zoom_label = Container::new(
        Text::new(i18n.tr_with_args(
            "modal-zoom-label",
            &[("percent", model.zoom.as_percent().to_string())],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::indicator);

    let zoom_bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(control(
            i18n,
            "−",
            "modal-zoom-out",
            (!model.zoom.is_min()).then_some(modal::Message::ZoomOut),
        ))
        .push(zoom_label)
        .push(control(
            i18n,
            "+",
            "modal-zoom-in",
            (!model.zoom.is_max()).then_some(modal::Message::ZoomIn),
        ));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(body)
        .push(zoom_bar);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::modal_backdrop)
        .into()
}

/// Round overlay button; `None` renders it disabled.
fn control<'a>(
    i18n: &I18n,
    glyph: &'a str,
    tooltip_key: &str,
    message: Option<modal::Message>,
) -> Element<'a, Message> {
    let control_button = button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(sizing::CONTROL_BUTTON))
    .height(Length::Fixed(sizing::CONTROL_BUTTON))
    .padding(0)
    .style(styles::button::overlay)
    .on_press_maybe(message.map(Message::Modal));

    tooltip(
        control_button,
        Text::new(i18n.tr(tooltip_key)),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}
