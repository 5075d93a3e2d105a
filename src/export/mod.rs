// SPDX-License-Identifier: MPL-2.0
//! Edit-and-save: sepia filter plus the permission-gated photo library.

pub mod filter;
pub mod library;

use std::path::PathBuf;

pub use filter::apply_sepia;
pub use library::{DirectoryLibrary, PhotoAuthorization, PhotoLibrary};

use crate::error::ExportError;
use crate::media::ImageData;

/// Asks the user for photo library access with a Yes/No dialog.
pub async fn request_authorization(title: String, description: String) -> PhotoAuthorization {
    let answer = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;

    match answer {
        rfd::MessageDialogResult::Yes => PhotoAuthorization::Authorized,
        _ => PhotoAuthorization::Denied,
    }
}

/// Filters `image` and saves it to `library`.
pub fn export_blocking<L: PhotoLibrary>(
    library: &L,
    image: &ImageData,
    page: usize,
    intensity: f32,
) -> Result<PathBuf, ExportError> {
    if library.authorization() != PhotoAuthorization::Authorized {
        return Err(ExportError::PermissionDenied);
    }
    let edited = apply_sepia(image, intensity)?;
    library.save(&edited, page)
}

/// Runs [`export_blocking`] on the blocking thread pool.
pub async fn export<L>(
    library: L,
    image: ImageData,
    page: usize,
    intensity: f32,
) -> Result<PathBuf, ExportError>
where
    L: PhotoLibrary + Send + 'static,
{
    tokio::task::spawn_blocking(move || export_blocking(&library, &image, page, intensity))
        .await
        .map_err(|err| ExportError::WriteFailed(err.to_string()))?
}
