// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state of the current gallery page.
//!
//! At scale 1 the image is aspect-fitted into the viewport. The pan offset
//! moves the image centre away from the viewport centre and is clamped so
//! an image larger than the viewport never shows empty space at its edges,
//! while a smaller one stays centred. The editing shrink is applied on top
//! when computing frames and never touches the user's scale.

use iced::{Point, Rectangle, Size, Vector};

use crate::config::{
    DEFAULT_MAX_ZOOM_SCALE, DOUBLE_CLICK_ZOOM_SCALE, EDITING_SHRINK_SCALE, MIN_ZOOM_SCALE,
};
use crate::transition::aspect_fit;

const SCALE_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomCell {
    scale: f32,
    offset: Vector,
    max_scale: f32,
    shrink: f32,
    /// Image size at scale 1.
    fitted: Size,
    viewport: Size,
}

impl Default for ZoomCell {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ZOOM_SCALE)
    }
}

impl ZoomCell {
    #[must_use]
    pub fn new(max_scale: f32) -> Self {
        Self {
            scale: MIN_ZOOM_SCALE,
            offset: Vector::ZERO,
            max_scale: max_scale.max(MIN_ZOOM_SCALE),
            shrink: 1.0,
            fitted: Size::ZERO,
            viewport: Size::ZERO,
        }
    }

    /// Sets the image and viewport sizes, keeping the pan in bounds.
    pub fn set_geometry(&mut self, image: Size, viewport: Size) {
        self.viewport = viewport;
        self.fitted = aspect_fit(image, Rectangle::new(Point::ORIGIN, viewport)).size();
        self.clamp_offset();
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_ZOOM_SCALE + SCALE_EPSILON
    }

    /// Frame of the current image drawn into `viewport`.
    #[must_use]
    pub fn image_frame(&self, viewport: Rectangle) -> Rectangle {
        let size = Size::new(
            self.fitted.width * self.scale * self.shrink,
            self.fitted.height * self.scale * self.shrink,
        );
        let center = viewport.center()
            + Vector::new(self.offset.x * self.shrink, self.offset.y * self.shrink);
        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    /// Zooms to `scale`, keeping the image point under `anchor` (viewport
    /// local) where it is.
    pub fn zoom_to(&mut self, scale: f32, anchor: Point) {
        let scale = scale.clamp(MIN_ZOOM_SCALE, self.max_scale);
        let half = Vector::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        let center = Point::new(half.x + self.offset.x, half.y + self.offset.y);
        let ratio = scale / self.scale;

        let new_center = anchor - (anchor - center) * ratio;
        self.offset = Vector::new(new_center.x - half.x, new_center.y - half.y);
        self.scale = scale;
        self.clamp_offset();
    }

    pub fn zoom_by(&mut self, factor: f32, anchor: Point) {
        self.zoom_to(self.scale * factor, anchor);
    }

    /// Double click: zoom in on `anchor`, or back out if already zoomed.
    pub fn toggle_double_click(&mut self, anchor: Point) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.zoom_to(DOUBLE_CLICK_ZOOM_SCALE, anchor);
        }
    }

    pub fn pan_by(&mut self, delta: Vector) {
        self.offset = self.offset + delta;
        self.clamp_offset();
    }

    pub fn reset(&mut self) {
        self.scale = MIN_ZOOM_SCALE;
        self.offset = Vector::ZERO;
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.shrink = if editing { EDITING_SHRINK_SCALE } else { 1.0 };
    }

    fn clamp_offset(&mut self) {
        let slack = |content: f32, viewport: f32| ((content - viewport) / 2.0).max(0.0);
        let max_x = slack(self.fitted.width * self.scale, self.viewport.width);
        let max_y = slack(self.fitted.height * self.scale, self.viewport.height);
        self.offset = Vector::new(
            self.offset.x.clamp(-max_x, max_x),
            self.offset.y.clamp(-max_y, max_y),
        );
    }
}
