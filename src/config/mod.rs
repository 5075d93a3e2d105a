// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Zoom bounds and chrome visibility when the gallery opens
//! - `[export]` - Export destination and sepia intensity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `INLINE_LENS_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use inline_lens::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Maximum zoom scale of a page (clamped to 1.0..=8.0).
    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,

    /// Whether toolbars are visible when the gallery opens.
    #[serde(
        default = "default_show_chrome",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_chrome_on_open: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_zoom: default_max_zoom(),
            show_chrome_on_open: default_show_chrome(),
        }
    }
}

impl GalleryConfig {
    /// Returns the configured maximum zoom, clamped to the supported range.
    #[must_use]
    pub fn effective_max_zoom(&self) -> f32 {
        self.max_zoom
            .unwrap_or(DEFAULT_MAX_ZOOM_SCALE)
            .clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT)
    }
}

/// Export settings for the edit-and-save shortcut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Directory receiving exported images. Defaults to `<Pictures>/InlineLens`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Sepia tone intensity (0.0 to 1.0).
    #[serde(
        default = "default_sepia_intensity",
        skip_serializing_if = "Option::is_none"
    )]
    pub sepia_intensity: Option<f32>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            sepia_intensity: default_sepia_intensity(),
        }
    }
}

impl ExportConfig {
    /// Returns the sepia intensity, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn effective_sepia_intensity(&self) -> f32 {
        self.sepia_intensity
            .unwrap_or(DEFAULT_SEPIA_INTENSITY)
            .clamp(0.0, 1.0)
    }

    /// Returns the export directory, falling back to the platform pictures folder.
    #[must_use]
    pub fn effective_directory(&self) -> Option<PathBuf> {
        self.directory.clone().or_else(|| {
            dirs::picture_dir().map(|mut path| {
                path.push(EXPORT_FOLDER_NAME);
                path
            })
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_max_zoom() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM_SCALE)
}

fn default_show_chrome() -> Option<bool> {
    Some(true)
}

fn default_sepia_intensity() -> Option<f32> {
    Some(DEFAULT_SEPIA_INTENSITY)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
