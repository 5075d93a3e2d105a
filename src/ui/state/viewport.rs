// SPDX-License-Identifier: MPL-2.0
//! Scroll position of the document view.
//!
//! Converts between content-host coordinates and window coordinates so a
//! thumbnail frame can seed the zoom transition.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Vector};

/// Bounds and scroll offset of the document scrollable.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Scrollable bounds in window coordinates, once reported.
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Records new bounds and offset.
    /// Returns true if the viewport width changed, meaning the document
    /// needs a new layout.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        let width_changed = self
            .bounds
            .is_none_or(|previous| (previous.width - bounds.width).abs() > f32::EPSILON);
        self.offset = offset;
        self.bounds = Some(bounds);
        width_changed
    }

    /// Top-left corner of the scrollable in the window. The document fills
    /// the window until the first scroll report arrives.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds.map_or(Point::ORIGIN, |bounds| bounds.position())
    }

    /// Maps a rectangle from content-host space into window space.
    #[must_use]
    pub fn to_window(&self, local: Rectangle) -> Rectangle {
        let origin = self.origin();
        local + Vector::new(origin.x - self.offset.x, origin.y - self.offset.y)
    }

    /// Maps a point from content-host space into window space.
    #[must_use]
    pub fn to_window_point(&self, local: Point) -> Point {
        let origin = self.origin();
        Point::new(
            local.x + origin.x - self.offset.x,
            local.y + origin.y - self.offset.y,
        )
    }

    /// Maps a window point into content-host space.
    #[must_use]
    pub fn to_local(&self, window: Point) -> Point {
        let origin = self.origin();
        Point::new(
            window.x - origin.x + self.offset.x,
            window.y - origin.y + self.offset.y,
        )
    }
}
