// SPDX-License-Identifier: MPL-2.0
//! Compact carousel: the active slide, dot indicators and the pause toggle.

use super::component::Message;
use super::subcomponents::carousel;
use crate::banner::Banner;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::banner_canvas::Cursor;
use crate::ui::widgets::{BannerCanvas, Fit, Slide};
use iced::widget::{self, button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub struct ViewModel<'a> {
    pub i18n: &'a I18n,
    pub banners: &'a [Banner],
    pub active_index: usize,
    /// Slide animation in flight, drawn over the active banner.
    pub slide: Option<Slide<'a>>,
    pub paused: bool,
    /// Autoplay enabled in the config; the pause toggle is hidden otherwise.
    pub autoplay: bool,
    pub loading: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let Some(banner) = model.banners.get(model.active_index) else {
        let key = if model.loading {
            "carousel-loading"
        } else {
            "carousel-empty"
        };
        return frame(
            Text::new(model.i18n.tr(key))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        );
    };

    let slide = BannerCanvas::new(banner, Fit::Cover)
        .cursor(Cursor::Clickable)
        .sliding(model.slide)
        .view()
        .map(|event| Message::Carousel(carousel::Message::Pointer(event)));

    let label = Text::new(model.i18n.tr_with_args(
        "carousel-slide-label",
        &[
            ("index", (model.active_index + 1).to_string()),
            ("total", model.banners.len().to_string()),
        ],
    ))
    .size(typography::CAPTION);

    let mut controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(label)
        .push(Space::new().width(Length::Fill))
        .push(dots(model.banners.len(), model.active_index))
        .push(Space::new().width(Length::Fill));

    if model.autoplay {
        controls = controls.push(pause_toggle(model.i18n, model.paused));
    }

    Column::new()
        .spacing(spacing::XS)
        .push(frame(slide))
        .push(controls)
        .width(Length::Fill)
        .into()
}

/// Fixed-height container every carousel state is drawn in.
fn frame(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::carousel)
        .into()
}

/// Widget id of the dot indicator for slide `index`.
#[must_use]
pub fn dot_id(index: usize) -> widget::Id {
    widget::Id::from(format!("carousel-dot-{index}"))
}

fn dots<'a>(count: usize, active: usize) -> Element<'a, Message> {
    (0..count)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let dot = button(Space::new())
                .width(Length::Fixed(sizing::DOT))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .style(styles::button::dot(index == active))
                .on_press(Message::Carousel(carousel::Message::Select(index)));
            row.push(Container::new(dot).id(dot_id(index)))
        })
        .into()
}

fn pause_toggle(i18n: &I18n, paused: bool) -> Element<'_, Message> {
    let (glyph, key) = if paused {
        ("▶", "carousel-play")
    } else {
        ("⏸", "carousel-pause")
    };

    let toggle = button(Text::new(glyph).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::subtle)
        .on_press(Message::Carousel(carousel::Message::TogglePause));

    tooltip(toggle, Text::new(i18n.tr(key)), tooltip::Position::Top)
        .gap(4)
        .into()
}
