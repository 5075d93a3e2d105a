// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the gallery toolbars and page counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    stroke,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn bar_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Rounded pill, used for the page counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(bar_background())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: stroke::HAIRLINE,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Full-width toolbar strip at the top or bottom of the gallery.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(bar_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
