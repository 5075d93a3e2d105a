// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::document::LoadedDocument;
use crate::error::{Error, ExportError};
use crate::export::PhotoAuthorization;
use crate::gallery;
use crate::media::ImageData;
use crate::ui::document_view;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    DocumentLoaded(Result<LoadedDocument, Error>),
    Document(document_view::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// The user answered the photo library prompt raised for an export.
    AuthorizationAnswered {
        status: PhotoAuthorization,
        page: usize,
        image: ImageData,
    },
    ExportCompleted(Result<PathBuf, ExportError>),
    /// Window resized while no gallery is open.
    WindowResized(iced::Size),
    /// Animation and notification timer.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// A markup document, or image files, to show instead of the samples.
    pub paths: Vec<PathBuf>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `INLINE_LENS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `INLINE_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_path: Option<PathBuf>,
}
