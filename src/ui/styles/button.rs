// SPDX-License-Identifier: MPL-2.0
//! Button styles for the gallery chrome.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow, stroke,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Confirming action, such as applying an edit.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (fill, edge, lift) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => return disabled()(theme, status),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: stroke::HAIRLINE,
            radius: radius::SM.into(),
        },
        shadow: lift,
        snap: true,
    }
}

/// Translucent dark button drawn over an image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (
                alpha_normal,
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..text_color
                },
            ),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Grayed out, for actions that are in progress.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: stroke::HAIRLINE,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
