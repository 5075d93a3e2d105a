// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Re-exports the `approx` assertion macros for float comparison and
//! provides small fixtures for images and documents.

pub use approx::assert_abs_diff_eq;

use crate::media::ImageData;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Creates a solid-color image of the given size.
pub fn solid_image(width: u32, height: u32) -> ImageData {
    let pixels = [200u8, 120, 40, 255]
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    ImageData::from_rgba(width, height, pixels)
}
