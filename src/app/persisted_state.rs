// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR next to the user's settings.
//!
//! Unlike `settings.toml`, nothing here is meant to be edited by hand: it
//! records the photo library authorization answer and where the last
//! document was opened from.

use super::paths;
use crate::export::PhotoAuthorization;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Answer given to the photo library permission prompt.
    #[serde(default)]
    pub photo_authorization: PhotoAuthorization,

    /// Directory of the last document opened from the command line.
    #[serde(default)]
    pub last_document_dir: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns default state and the i18n key of a warning when the file
    /// exists but cannot be read.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!("cannot open {}: {}", path.display(), err);
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!("cannot decode {}: {}", path.display(), err);
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location.
    ///
    /// Returns the i18n key of a warning if saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state into `base_dir`, or the default data directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });

        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!("cannot write {}: {}", path.display(), err);
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory containing `document_path`.
    pub fn set_last_document_dir_from_file(&mut self, document_path: &Path) {
        if let Some(parent) = document_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_document_dir = Some(parent.to_path_buf());
            }
        }
    }
}
