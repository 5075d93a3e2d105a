// SPDX-License-Identifier: MPL-2.0
//! Sepia tone filter.

use image_rs::{Rgba, RgbaImage};

use crate::error::ExportError;
use crate::media::ImageData;

/// Rows of the sepia colour matrix, applied to linear `[r, g, b]`.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Tones one pixel. `intensity` blends between the original (0.0) and
/// full sepia (1.0); alpha is kept.
#[must_use]
pub fn sepia_pixel(pixel: Rgba<u8>, intensity: f32) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let source = [f32::from(r), f32::from(g), f32::from(b)];
    let mut out = [0u8; 4];
    for (channel, row) in SEPIA.iter().enumerate() {
        let toned: f32 = row.iter().zip(source).map(|(k, v)| k * v).sum();
        let blended = source[channel] + (toned - source[channel]) * intensity;
        out[channel] = blended.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = a;
    Rgba(out)
}

/// Returns a sepia-toned copy of `image`, leaving the original untouched.
pub fn apply_sepia(image: &ImageData, intensity: f32) -> Result<ImageData, ExportError> {
    let intensity = intensity.clamp(0.0, 1.0);
    let mut pixels: RgbaImage = image
        .to_rgba_image()
        .map_err(|err| ExportError::EncodingFailed(err.to_string()))?;
    for pixel in pixels.pixels_mut() {
        *pixel = sepia_pixel(*pixel, intensity);
    }
    Ok(ImageData::from_rgba_image(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image;

    #[test]
    fn zero_intensity_keeps_pixels() {
        let pixel = Rgba([10, 120, 240, 77]);
        assert_eq!(sepia_pixel(pixel, 0.0), pixel);
    }

    #[test]
    fn full_intensity_matches_the_sepia_matrix() {
        let toned = sepia_pixel(Rgba([100, 100, 100, 255]), 1.0);
        // 100 * row sums, clamped.
        assert_eq!(toned, Rgba([135, 120, 94, 255]));
    }

    #[test]
    fn white_saturates_without_wrapping() {
        let toned = sepia_pixel(Rgba([255, 255, 255, 255]), 1.0);
        assert_eq!(toned.0[0], 255);
        assert_eq!(toned.0[1], 255);
        assert_eq!(toned.0[2], 239);
    }

    #[test]
    fn partial_intensity_blends_toward_sepia() {
        let toned = sepia_pixel(Rgba([100, 100, 100, 255]), 0.8);
        // 100 + (135.1 - 100) * 0.8
        assert_eq!(toned.0[0], 128);
        assert_eq!(toned.0[2], 95);
    }

    #[test]
    fn filtering_does_not_touch_the_source() {
        let source = solid_image(4, 2);
        let before = source.rgba_bytes().to_vec();
        let filtered = apply_sepia(&source, 0.8).expect("filter");

        assert_eq!(source.rgba_bytes(), before.as_slice());
        assert!(!filtered.shares_pixels(&source));
        assert_eq!((filtered.width, filtered.height), (4, 2));
    }
}
