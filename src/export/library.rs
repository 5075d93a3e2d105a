// SPDX-License-Identifier: MPL-2.0
//! Permission-gated destination for exported images.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image_rs::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::media::ImageData;

/// Whether the user allowed saving to the photo library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoAuthorization {
    /// Never asked.
    #[default]
    NotDetermined,
    Authorized,
    Denied,
}

/// A place edited images can be saved to.
pub trait PhotoLibrary {
    fn authorization(&self) -> PhotoAuthorization;

    fn set_authorization(&mut self, status: PhotoAuthorization);

    /// Stores `image`, exported from gallery `page`, and returns where it
    /// went. Fails with [`ExportError::PermissionDenied`] unless authorized.
    fn save(&self, image: &ImageData, page: usize) -> Result<PathBuf, ExportError>;
}

/// Photo library backed by a plain directory of PNG files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLibrary {
    directory: Option<PathBuf>,
    authorization: PhotoAuthorization,
}

impl DirectoryLibrary {
    #[must_use]
    pub fn new(directory: Option<PathBuf>, authorization: PhotoAuthorization) -> Self {
        Self {
            directory,
            authorization,
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

impl PhotoLibrary for DirectoryLibrary {
    fn authorization(&self) -> PhotoAuthorization {
        self.authorization
    }

    fn set_authorization(&mut self, status: PhotoAuthorization) {
        self.authorization = status;
    }

    fn save(&self, image: &ImageData, page: usize) -> Result<PathBuf, ExportError> {
        if self.authorization != PhotoAuthorization::Authorized {
            return Err(ExportError::PermissionDenied);
        }
        let directory = self.directory.as_ref().ok_or(ExportError::NoDestination)?;
        fs::create_dir_all(directory).map_err(|err| ExportError::WriteFailed(err.to_string()))?;

        let path = unique_path(directory, &export_file_stem(page, Local::now()));
        let pixels = image
            .to_rgba_image()
            .map_err(|err| ExportError::EncodingFailed(err.to_string()))?;
        pixels
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|err| match err {
                image_rs::ImageError::IoError(io) => ExportError::WriteFailed(io.to_string()),
                other => ExportError::EncodingFailed(other.to_string()),
            })?;

        tracing::debug!(path = %path.display(), "saved edited image");
        Ok(path)
    }
}

/// File name without extension: `inline_lens-YYYYMMDD-HHMMSS-<page>`.
#[must_use]
pub fn export_file_stem(page: usize, at: DateTime<Local>) -> String {
    format!("inline_lens-{}-{}", at.format("%Y%m%d-%H%M%S"), page)
}

/// First `<stem>.png`, `<stem>-2.png`, ... that does not exist yet.
fn unique_path(directory: &Path, stem: &str) -> PathBuf {
    let first = directory.join(format!("{stem}.png"));
    if !first.exists() {
        return first;
    }
    (2u32..)
        .map(|n| directory.join(format!("{stem}-{n}.png")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}
