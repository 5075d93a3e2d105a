// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection and the colors derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used to paint the document and overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    /// Outline drawn around inline thumbnails.
    pub thumbnail_border: Color,
    /// Fill behind a thumbnail whose image is missing.
    pub thumbnail_missing: Color,
    pub brand: Color,
    /// Gallery backdrop at full opacity.
    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text: palette::GRAY_900,
            text_muted: palette::GRAY_700,
            thumbnail_border: palette::GRAY_200,
            thumbnail_missing: palette::GRAY_100,
            brand: palette::PRIMARY_500,
            backdrop: palette::BLACK,
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text: palette::WHITE,
            text_muted: palette::GRAY_200,
            thumbnail_border: palette::GRAY_700,
            thumbnail_missing: Color::from_rgb(0.2, 0.2, 0.2),
            brand: palette::PRIMARY_400,
            backdrop: palette::BLACK,
            overlay_text: palette::WHITE,
        }
    }

    /// Backdrop color faded to `alpha`.
    #[must_use]
    pub fn backdrop_with_alpha(&self, alpha: f32) -> Color {
        Color {
            a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
            ..self.backdrop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// The resolved theme: System is looked up once, at construction.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Matching built-in Iced theme for standard widgets.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
