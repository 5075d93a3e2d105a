// SPDX-License-Identifier: MPL-2.0
//! Generated images: the demo samples shown when no document is given and
//! the stand-in used when an image fails to load.

use super::ImageData;
use image_rs::{Rgba, RgbaImage};

/// Sizes of the generated samples: landscape, portrait, wide.
const SAMPLE_SIZES: [(u32, u32); 3] = [(600, 400), (400, 600), (640, 360)];

/// Sky/ground color pairs for each sample.
const SAMPLE_PALETTES: [([u8; 3], [u8; 3]); 3] = [
    ([112, 170, 230], [70, 130, 60]),
    ([250, 180, 120], [120, 80, 60]),
    ([40, 50, 110], [30, 90, 120]),
];

/// Returns the three demo images.
#[must_use]
pub fn sample_images() -> Vec<ImageData> {
    SAMPLE_SIZES
        .iter()
        .zip(SAMPLE_PALETTES.iter())
        .map(|(&(width, height), &(sky, ground))| {
            ImageData::from_rgba_image(landscape(width, height, sky, ground))
        })
        .collect()
}

/// A neutral "photo" pictogram shown in place of an image that could not be loaded.
#[must_use]
pub fn fallback_image() -> ImageData {
    ImageData::from_rgba_image(landscape(300, 200, [190, 190, 196], [140, 140, 148]))
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Sky gradient, a sun disc and a hill whose crest follows a sine wave.
fn landscape(width: u32, height: u32, sky: [u8; 3], ground: [u8; 3]) -> RgbaImage {
    let w = width as f32;
    let h = height as f32;
    let sun = (w * 0.72, h * 0.3, h.min(w) * 0.1);

    RgbaImage::from_fn(width, height, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        let crest = h * 0.62 + (fx / w * std::f32::consts::TAU).sin() * h * 0.06;

        if fy > crest {
            let t = ((fy - crest) / (h - crest).max(1.0)).clamp(0.0, 1.0);
            Rgba([
                lerp(ground[0], ground[0] / 2, t),
                lerp(ground[1], ground[1] / 2, t),
                lerp(ground[2], ground[2] / 2, t),
                255,
            ])
        } else if (fx - sun.0).hypot(fy - sun.1) < sun.2 {
            Rgba([255, 236, 170, 255])
        } else {
            let t = fy / crest.max(1.0);
            Rgba([
                lerp(sky[0], 255, t * 0.6),
                lerp(sky[1], 255, t * 0.6),
                lerp(sky[2], 255, t * 0.6),
                255,
            ])
        }
    })
}
