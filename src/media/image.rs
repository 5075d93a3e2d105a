// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, RgbaImage};
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA pixels, shared between clones.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    #[must_use]
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::from_rgba(width, height, image.into_raw())
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Copies the pixels into an `image` buffer for processing.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .ok_or_else(|| Error::Image("pixel buffer does not match dimensions".into()))
    }

    /// Height divided by width; 1.0 for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.height as f32 / self.width as f32
        }
    }

    /// Returns true if both values point at the same pixel allocation.
    #[must_use]
    pub fn shares_pixels(&self, other: &ImageData) -> bool {
        Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}

/// Decodes the raster image at `path`.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    Ok(ImageData::from_rgba(
        width,
        height,
        decoded.to_rgba8().into_raw(),
    ))
}
