// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button drawn over an image (modal controls).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        palette::GRAY_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Carousel dot indicator; `active` marks the visible slide.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_200
            },
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Flat text button for the pause toggle.
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
