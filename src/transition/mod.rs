// SPDX-License-Identifier: MPL-2.0
//! Animated hand-off between a thumbnail and the gallery.
//!
//! A [`Transition`] moves a single image proxy between two rectangles in
//! window coordinates while the gallery backdrop fades. It is a pure
//! function of time: the app samples it on every animation tick and drops
//! it once [`Transition::is_finished`] holds.

pub mod spring;

use std::time::{Duration, Instant};

use iced::{Point, Rectangle, Size, Vector};

use crate::config::{
    DISMISS_ZOOM_DAMPING, DISMISS_ZOOM_DURATION, DISMISS_ZOOM_INITIAL_VELOCITY, FADE_OUT_DURATION,
    PRESENT_DAMPING, PRESENT_DURATION, PRESENT_INITIAL_VELOCITY, SLIDE_OUT_DURATION,
};
use crate::media::ImageData;
pub use spring::{Curve, SpringCurve};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Present,
    Dismiss,
}

/// Why a transition could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    MissingImage,
    InvalidSource,
    InvalidDestination,
}

impl AbortReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbortReason::MissingImage => "missing_image",
            AbortReason::InvalidSource => "invalid_source",
            AbortReason::InvalidDestination => "invalid_destination",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    /// The proxy travels between two frames.
    Zoom { from: Rectangle, to: Rectangle },
    /// The proxy stays in place and fades out.
    Fade { frame: Rectangle },
    /// The proxy moves down by `distance` while fading out.
    Slide { frame: Rectangle, distance: f32 },
}

/// What to draw for one instant of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub proxy: Rectangle,
    pub proxy_opacity: f32,
    pub backdrop_alpha: f32,
}

#[derive(Debug, Clone)]
pub struct Transition {
    direction: Direction,
    motion: Motion,
    curve: Curve,
    image: ImageData,
    page: usize,
    backdrop_from: f32,
    started_at: Instant,
}

/// Largest rectangle with the image's aspect ratio centered in `bounds`.
#[must_use]
pub fn aspect_fit(image: Size, bounds: Rectangle) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width / image.width).min(bounds.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);
    Rectangle::new(
        Point::new(
            bounds.x + (bounds.width - size.width) / 2.0,
            bounds.y + (bounds.height - size.height) / 2.0,
        ),
        size,
    )
}

/// True if the rectangle is finite and not empty.
#[must_use]
pub fn is_valid_rect(rect: Rectangle) -> bool {
    [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .all(|v| v.is_finite())
        && rect.width > 0.0
        && rect.height > 0.0
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rect(a: Rectangle, b: Rectangle, t: f32) -> Rectangle {
    Rectangle {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        width: lerp(a.width, b.width, t),
        height: lerp(a.height, b.height, t),
    }
}

fn image_size(image: &ImageData) -> Size {
    Size::new(image.width as f32, image.height as f32)
}

impl Transition {
    /// Zooms `image` from the thumbnail `source` to fill `window`.
    pub fn present(
        image: Option<&ImageData>,
        source: Rectangle,
        window: Size,
        page: usize,
        now: Instant,
    ) -> Result<Self, AbortReason> {
        let image = image.ok_or(AbortReason::MissingImage)?;
        if !is_valid_rect(source) {
            return Err(AbortReason::InvalidSource);
        }
        let bounds = Rectangle::new(Point::ORIGIN, window);
        if !is_valid_rect(bounds) {
            return Err(AbortReason::InvalidDestination);
        }

        Ok(Self {
            direction: Direction::Present,
            motion: Motion::Zoom {
                from: source,
                to: aspect_fit(image_size(image), bounds),
            },
            curve: Curve::Spring(SpringCurve::new(
                PRESENT_DAMPING,
                PRESENT_INITIAL_VELOCITY,
                PRESENT_DURATION,
            )),
            image: image.clone(),
            page,
            backdrop_from: 0.0,
            started_at: now,
        })
    }

    /// Returns the gallery page `image` to its thumbnail.
    ///
    /// `frame` is where the page is drawn now. Without a usable `thumbnail`
    /// the page fades out in place instead.
    pub fn dismiss(
        image: Option<&ImageData>,
        frame: Rectangle,
        thumbnail: Option<Rectangle>,
        backdrop_alpha: f32,
        page: usize,
        now: Instant,
    ) -> Result<Self, AbortReason> {
        let image = image.ok_or(AbortReason::MissingImage)?;
        if !is_valid_rect(frame) {
            return Err(AbortReason::InvalidSource);
        }

        let (motion, curve) = match thumbnail.filter(|rect| is_valid_rect(*rect)) {
            Some(to) => (
                Motion::Zoom { from: frame, to },
                Curve::Spring(SpringCurve::new(
                    DISMISS_ZOOM_DAMPING,
                    DISMISS_ZOOM_INITIAL_VELOCITY,
                    DISMISS_ZOOM_DURATION,
                )),
            ),
            None => (Motion::Fade { frame }, Curve::EaseInOut(FADE_OUT_DURATION)),
        };

        Ok(Self {
            direction: Direction::Dismiss,
            motion,
            curve,
            image: image.clone(),
            page,
            backdrop_from: backdrop_alpha.clamp(0.0, 1.0),
            started_at: now,
        })
    }

    /// Slides the dragged page off the bottom of the window while fading.
    ///
    /// `frame` already includes the drag offset.
    pub fn slide_out(
        image: Option<&ImageData>,
        frame: Rectangle,
        window: Size,
        backdrop_alpha: f32,
        page: usize,
        now: Instant,
    ) -> Result<Self, AbortReason> {
        let image = image.ok_or(AbortReason::MissingImage)?;
        if !is_valid_rect(frame) {
            return Err(AbortReason::InvalidSource);
        }
        if !window.height.is_finite() || window.height <= 0.0 {
            return Err(AbortReason::InvalidDestination);
        }

        Ok(Self {
            direction: Direction::Dismiss,
            motion: Motion::Slide {
                frame,
                distance: window.height,
            },
            curve: Curve::EaseInOut(SLIDE_OUT_DURATION),
            image: image.clone(),
            page,
            backdrop_from: backdrop_alpha.clamp(0.0, 1.0),
            started_at: now,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn duration(&self) -> Duration {
        self.curve.duration()
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.curve.duration()
    }

    /// Samples the proxy and backdrop at `now`.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> TransitionFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = self.curve.value(elapsed);
        let fade = progress.clamp(0.0, 1.0);

        let backdrop_alpha = match self.direction {
            Direction::Present => lerp(self.backdrop_from, 1.0, fade),
            Direction::Dismiss => lerp(self.backdrop_from, 0.0, fade),
        };

        match self.motion {
            Motion::Zoom { from, to } => TransitionFrame {
                proxy: lerp_rect(from, to, progress),
                proxy_opacity: 1.0,
                backdrop_alpha,
            },
            Motion::Fade { frame } => TransitionFrame {
                proxy: frame,
                proxy_opacity: 1.0 - fade,
                backdrop_alpha,
            },
            Motion::Slide { frame, distance } => TransitionFrame {
                proxy: frame + Vector::new(0.0, distance * fade),
                proxy_opacity: 1.0 - fade,
                backdrop_alpha,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, solid_image};

    const WINDOW: Size = Size::new(800.0, 600.0);

    fn thumb() -> Rectangle {
        Rectangle::new(Point::new(20.0, 64.0), Size::new(150.0, 100.0))
    }

    #[test]
    fn aspect_fit_letterboxes_wide_images() {
        let fitted = aspect_fit(
            Size::new(400.0, 100.0),
            Rectangle::new(Point::ORIGIN, WINDOW),
        );
        assert_eq!(
            fitted,
            Rectangle::new(Point::new(0.0, 200.0), Size::new(800.0, 200.0))
        );
    }

    #[test]
    fn present_travels_from_thumbnail_to_fitted_frame() {
        let image = solid_image(300, 200);
        let start = Instant::now();
        let transition =
            Transition::present(Some(&image), thumb(), WINDOW, 0, start).expect("starts");

        let first = transition.frame_at(start);
        assert_eq!(first.proxy, thumb());
        assert_abs_diff_eq!(first.backdrop_alpha, 0.0, epsilon = 1e-4);

        let end = start + PRESENT_DURATION;
        assert!(transition.is_finished(end));
        let last = transition.frame_at(end);
        assert_rect_eq(
            last.proxy,
            Rectangle::new(Point::new(0.0, 100.0 / 3.0), Size::new(800.0, 1600.0 / 3.0)),
        );
        assert_eq!(last.backdrop_alpha, 1.0);
    }

    #[test]
    fn present_aborts_without_image_or_with_empty_source() {
        let image = solid_image(10, 10);
        let now = Instant::now();
        assert_eq!(
            Transition::present(None, thumb(), WINDOW, 0, now).err(),
            Some(AbortReason::MissingImage)
        );
        let empty = Rectangle::new(Point::ORIGIN, Size::ZERO);
        assert_eq!(
            Transition::present(Some(&image), empty, WINDOW, 0, now).err(),
            Some(AbortReason::InvalidSource)
        );
        let nan = Rectangle::new(Point::new(f32::NAN, 0.0), Size::new(1.0, 1.0));
        assert_eq!(
            Transition::present(Some(&image), nan, WINDOW, 0, now).err(),
            Some(AbortReason::InvalidSource)
        );
        assert_eq!(
            Transition::present(Some(&image), thumb(), Size::ZERO, 0, now).err(),
            Some(AbortReason::InvalidDestination)
        );
    }

    #[test]
    fn dismiss_without_thumbnail_fades_in_place() {
        let image = solid_image(10, 10);
        let frame = Rectangle::new(Point::new(100.0, 0.0), Size::new(600.0, 600.0));
        let start = Instant::now();
        let transition =
            Transition::dismiss(Some(&image), frame, None, 1.0, 2, start).expect("starts");

        assert_eq!(transition.duration(), FADE_OUT_DURATION);
        let middle = transition.frame_at(start + FADE_OUT_DURATION / 2);
        assert_eq!(middle.proxy, frame);
        assert_abs_diff_eq!(middle.proxy_opacity, 0.5);
        assert_abs_diff_eq!(middle.backdrop_alpha, 0.5);
        assert_eq!(transition.page(), 2);
    }

    #[test]
    fn dismiss_to_thumbnail_ends_on_it() {
        let image = solid_image(10, 10);
        let frame = Rectangle::new(Point::new(100.0, 0.0), Size::new(600.0, 600.0));
        let start = Instant::now();
        let transition = Transition::dismiss(Some(&image), frame, Some(thumb()), 0.6, 0, start)
            .expect("starts");

        assert_eq!(transition.duration(), DISMISS_ZOOM_DURATION);
        let end = transition.frame_at(start + DISMISS_ZOOM_DURATION);
        assert_eq!(end.proxy, thumb());
        assert_eq!(end.backdrop_alpha, 0.0);
        assert_abs_diff_eq!(transition.frame_at(start).backdrop_alpha, 0.6);
    }

    #[test]
    fn slide_out_moves_down_one_window_height() {
        let image = solid_image(10, 10);
        let frame = Rectangle::new(Point::new(100.0, 200.0), Size::new(600.0, 600.0));
        let start = Instant::now();
        let transition =
            Transition::slide_out(Some(&image), frame, WINDOW, 0.5, 0, start).expect("starts");

        let end = transition.frame_at(start + SLIDE_OUT_DURATION);
        assert_abs_diff_eq!(end.proxy.y, 800.0);
        assert_eq!(end.proxy_opacity, 0.0);
        assert_eq!(end.backdrop_alpha, 0.0);
        assert!(!transition.is_finished(start + SLIDE_OUT_DURATION / 2));
    }

    fn assert_rect_eq(actual: Rectangle, expected: Rectangle) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-3);
        assert_abs_diff_eq!(actual.width, expected.width, epsilon = 1e-3);
        assert_abs_diff_eq!(actual.height, expected.height, epsilon = 1e-3);
    }
}
