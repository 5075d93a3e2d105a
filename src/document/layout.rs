// SPDX-License-Identifier: MPL-2.0
//! Flow layout of a document on a fixed character grid.
//!
//! Text advances by a constant width per character and wraps at the
//! container width; `\n` starts a new line. Placeholders are inline boxes
//! that wrap as a unit, grow their line to fit, and sit on the baseline at
//! the bottom of the line. All rectangles are in text-container space: the
//! host's insets are not included.

use iced::{Point, Rectangle, Size, Vector};

use super::model::{Document, PlaceholderId, Run};
use crate::config::{
    DOCUMENT_CHAR_WIDTH, DOCUMENT_FONT_SIZE, DOCUMENT_INSET_X, DOCUMENT_INSET_Y,
    DOCUMENT_LINE_HEIGHT,
};

/// Metrics driving the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub char_width: f32,
    pub line_height: f32,
    pub font_size: f32,
    /// Distance between the host edge and the text container.
    pub inset: Vector,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: DOCUMENT_CHAR_WIDTH,
            line_height: DOCUMENT_LINE_HEIGHT,
            font_size: DOCUMENT_FONT_SIZE,
            inset: Vector::new(DOCUMENT_INSET_X, DOCUMENT_INSET_Y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKind {
    Char(char),
    Placeholder { index: usize, id: PlaceholderId },
}

/// A positioned character cell or placeholder box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub kind: SlotKind,
    pub rect: Rectangle,
    /// Offset of the slot's run element in the document, in characters;
    /// a placeholder counts as one.
    pub char_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub top: f32,
    pub height: f32,
    slots: std::ops::Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    slots: Vec<Slot>,
    lines: Vec<Line>,
    metrics: LayoutMetrics,
    content_size: Size,
}

/// Accumulates the slots of the line being filled.
struct LineBuilder {
    slots: Vec<Slot>,
    lines: Vec<Line>,
    line_start: usize,
    cursor_x: f32,
    top: f32,
    container_width: f32,
    metrics: LayoutMetrics,
}

impl LineBuilder {
    fn push(&mut self, kind: SlotKind, size: Size, char_index: usize) {
        if self.cursor_x > 0.0 && self.cursor_x + size.width > self.container_width {
            self.finish_line();
        }
        self.slots.push(Slot {
            kind,
            // `y` is fixed once the line height is known.
            rect: Rectangle::new(Point::new(self.cursor_x, 0.0), size),
            char_index,
        });
        self.cursor_x += size.width;
    }

    fn finish_line(&mut self) {
        let range = self.line_start..self.slots.len();
        let height = self.slots[range.clone()]
            .iter()
            .map(|slot| slot.rect.height)
            .fold(self.metrics.line_height, f32::max);
        let bottom = self.top + height;
        for slot in &mut self.slots[range.clone()] {
            slot.rect.y = bottom - slot.rect.height;
        }

        self.lines.push(Line {
            top: self.top,
            height,
            slots: range,
        });
        self.top = bottom;
        self.line_start = self.slots.len();
        self.cursor_x = 0.0;
    }
}

impl Layout {
    /// Lays out `document` for a host `width` pixels wide.
    #[must_use]
    pub fn compute(document: &Document, width: f32, metrics: LayoutMetrics) -> Self {
        let container_width = (width - 2.0 * metrics.inset.x).max(metrics.char_width);
        let mut builder = LineBuilder {
            slots: Vec::new(),
            lines: Vec::new(),
            line_start: 0,
            cursor_x: 0.0,
            top: 0.0,
            container_width,
            metrics,
        };
        let glyph = Size::new(metrics.char_width, metrics.line_height);
        let mut char_index = 0;

        for run in document.runs() {
            match run {
                Run::Text(text) => {
                    for ch in text.chars() {
                        if ch == '\n' {
                            builder.finish_line();
                        } else {
                            builder.push(SlotKind::Char(ch), glyph, char_index);
                        }
                        char_index += 1;
                    }
                }
                Run::Placeholder(placeholder) => {
                    let mut size = placeholder.display_size;
                    if size.width > container_width {
                        size = Size::new(
                            container_width,
                            size.height * container_width / size.width,
                        );
                    }
                    builder.push(
                        SlotKind::Placeholder {
                            index: placeholder.index,
                            id: placeholder.id,
                        },
                        size,
                        char_index,
                    );
                    char_index += 1;
                }
            }
        }
        if builder.line_start < builder.slots.len() || builder.lines.is_empty() {
            builder.finish_line();
        }

        let content_size = Size::new(
            width.max(container_width + 2.0 * metrics.inset.x),
            builder.top + 2.0 * metrics.inset.y,
        );

        Self {
            slots: builder.slots,
            lines: builder.lines,
            metrics,
            content_size,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_slots(&self, line: &Line) -> &[Slot] {
        &self.slots[line.slots.clone()]
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Size of the laid-out document including insets.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Container-space rectangle of the placeholder at `index`.
    pub fn placeholder_rect(&self, index: usize) -> Option<Rectangle> {
        self.slots.iter().find_map(|slot| match slot.kind {
            SlotKind::Placeholder { index: i, .. } if i == index => Some(slot.rect),
            _ => None,
        })
    }

    /// The slot closest to `point`, given in container space.
    ///
    /// The line is the one spanning `point.y` (or the closest line), then
    /// the slot on that line spanning `point.x` (or the closest slot).
    /// Empty lines have no slot.
    pub fn nearest_slot(&self, point: Point) -> Option<&Slot> {
        let line = self.lines.iter().min_by(|a, b| {
            span_distance(point.y, a.top, a.height).total_cmp(&span_distance(
                point.y, b.top, b.height,
            ))
        })?;

        self.line_slots(line).iter().min_by(|a, b| {
            span_distance(point.x, a.rect.x, a.rect.width)
                .total_cmp(&span_distance(point.x, b.rect.x, b.rect.width))
        })
    }
}

/// Distance from `value` to the span `[start, start + length)`; 0 inside.
fn span_distance(value: f32, start: f32, length: f32) -> f32 {
    if value < start {
        start - value
    } else if value >= start + length {
        // The end is exclusive, so a point on it must lose to the next span.
        value - (start + length) + f32::EPSILON
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{DocumentBuilder, ImageRef};
    use crate::test_utils::assert_abs_diff_eq;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            char_width: 10.0,
            line_height: 20.0,
            font_size: 16.0,
            inset: Vector::new(5.0, 5.0),
        }
    }

    #[test]
    fn text_wraps_at_container_width() {
        let document = DocumentBuilder::new().text("abcdef").build();
        // 40 px container: four characters per line.
        let layout = Layout::compute(&document, 50.0, metrics());

        assert_eq!(layout.lines().len(), 2);
        let second = &layout.slots()[4];
        assert_eq!(second.kind, SlotKind::Char('e'));
        assert_eq!(second.rect, Rectangle::new(Point::new(0.0, 20.0), Size::new(10.0, 20.0)));
    }

    #[test]
    fn newlines_produce_empty_lines() {
        let document = DocumentBuilder::new().text("a\n\nb").build();
        let layout = Layout::compute(&document, 200.0, metrics());

        assert_eq!(layout.lines().len(), 3);
        assert!(layout.line_slots(&layout.lines()[1]).is_empty());
        assert_abs_diff_eq!(layout.content_size().height, 70.0);
    }

    #[test]
    fn placeholder_grows_line_and_sits_on_baseline() {
        let document = DocumentBuilder::new()
            .text("ab")
            .placeholder(ImageRef::Sample(0), "", Size::new(30.0, 60.0))
            .build();
        let layout = Layout::compute(&document, 200.0, metrics());

        assert_eq!(layout.lines().len(), 1);
        assert_abs_diff_eq!(layout.lines()[0].height, 60.0);
        assert_eq!(
            layout.placeholder_rect(0),
            Some(Rectangle::new(Point::new(20.0, 0.0), Size::new(30.0, 60.0)))
        );
        // Characters are bottom-aligned with the box.
        assert_abs_diff_eq!(layout.slots()[0].rect.y, 40.0);
    }

    #[test]
    fn wide_placeholder_wraps_and_shrinks_to_container() {
        let document = DocumentBuilder::new()
            .text("abc")
            .placeholder(ImageRef::Sample(0), "", Size::new(150.0, 100.0))
            .build();
        let layout = Layout::compute(&document, 110.0, metrics());

        let rect = layout.placeholder_rect(0).expect("placeholder laid out");
        assert_abs_diff_eq!(rect.x, 0.0);
        assert_abs_diff_eq!(rect.y, 20.0);
        assert_abs_diff_eq!(rect.width, 100.0);
        assert_abs_diff_eq!(rect.height, 100.0 * 100.0 / 150.0, epsilon = 1e-3);
    }

    #[test]
    fn nearest_slot_prefers_containing_line_then_closest_slot() {
        let document = DocumentBuilder::new().text("ab\ncd").build();
        let layout = Layout::compute(&document, 200.0, metrics());

        let slot = layout.nearest_slot(Point::new(500.0, 25.0)).expect("slot");
        assert_eq!(slot.kind, SlotKind::Char('d'));

        let slot = layout.nearest_slot(Point::new(-10.0, -10.0)).expect("slot");
        assert_eq!(slot.kind, SlotKind::Char('a'));
    }

    #[test]
    fn empty_document_has_one_empty_line() {
        let layout = Layout::compute(&Document::default(), 200.0, metrics());
        assert_eq!(layout.lines().len(), 1);
        assert!(layout.nearest_slot(Point::ORIGIN).is_none());
    }
}
