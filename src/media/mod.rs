// SPDX-License-Identifier: MPL-2.0
//! Decoded images shared between the document and the gallery.
//!
//! Pixels are reference counted so a gallery session can snapshot the
//! document's images without copying them.

pub mod image;
pub mod sample;

use std::path::Path;

pub use image::{load_image, ImageData};
pub use sample::{fallback_image, sample_images};

/// File extensions treated as images when given on the command line.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Returns true if `path` has one of [`IMAGE_EXTENSIONS`].
#[must_use]
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
