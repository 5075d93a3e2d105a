// SPDX-License-Identifier: MPL-2.0
//! Resolves a click in the content host to the placeholder under it.

use iced::{Point, Rectangle, Vector};

use super::layout::{Layout, SlotKind};
use super::model::Document;

/// A placeholder hit by a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    /// Placeholder rectangle in host-local coordinates (insets included).
    pub frame: Rectangle,
}

/// Returns the placeholder containing `point`, given in host-local space.
///
/// The point is moved into text-container space, the nearest slot is
/// resolved, and only a placeholder slot that strictly contains the point
/// counts. The placeholder is then looked up by identity in `document`.
pub fn hit_test(document: &Document, layout: &Layout, point: Point) -> Option<Hit> {
    let inset = layout.metrics().inset;
    let local = point - inset;

    let slot = layout.nearest_slot(local)?;
    let SlotKind::Placeholder { id, .. } = slot.kind else {
        return None;
    };
    if !contains(slot.rect, local) {
        return None;
    }

    let Some(index) = document.index_of(id) else {
        tracing::debug!(?id, "laid-out placeholder is missing from the document");
        return None;
    };

    Some(Hit {
        index,
        frame: slot.rect + Vector::new(inset.x, inset.y),
    })
}

fn contains(rect: Rectangle, point: Point) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::layout::LayoutMetrics;
    use crate::document::model::{DocumentBuilder, ImageRef};
    use iced::Size;

    fn fixture() -> (Document, Layout) {
        let document = DocumentBuilder::new()
            .text("Tap images below:\n\n")
            .placeholder(ImageRef::Sample(0), "", Size::new(150.0, 100.0))
            .text("\n\n")
            .placeholder(ImageRef::Sample(1), "", Size::new(150.0, 225.0))
            .text("\n\n")
            .build();
        let layout = Layout::compute(&document, 400.0, LayoutMetrics::default());
        (document, layout)
    }

    fn host_rect(layout: &Layout, index: usize) -> Rectangle {
        let inset = layout.metrics().inset;
        layout.placeholder_rect(index).expect("laid out") + Vector::new(inset.x, inset.y)
    }

    #[test]
    fn points_inside_a_placeholder_resolve_to_it() {
        let (document, layout) = fixture();
        for index in 0..2 {
            let rect = host_rect(&layout, index);
            for point in [
                rect.center(),
                Point::new(rect.x + 1.0, rect.y + 1.0),
                Point::new(rect.x + rect.width - 1.0, rect.y + rect.height - 1.0),
            ] {
                let hit = hit_test(&document, &layout, point).expect("hit");
                assert_eq!(hit.index, index);
                assert_eq!(hit.frame, rect);
            }
        }
    }

    #[test]
    fn points_outside_placeholders_miss() {
        let (document, layout) = fixture();
        let rect = host_rect(&layout, 0);

        // On text, right of the box, in the inset, and on an empty line.
        for point in [
            Point::new(25.0, 25.0),
            Point::new(rect.x + rect.width + 5.0, rect.center_y()),
            Point::new(5.0, rect.center_y()),
            Point::new(rect.center_x(), rect.y + rect.height + 10.0),
        ] {
            assert_eq!(hit_test(&document, &layout, point), None, "{point:?}");
        }
    }

    #[test]
    fn placeholder_unknown_to_the_document_is_ignored() {
        let (_, layout) = fixture();
        let (other_document, _) = fixture();
        let rect = host_rect(&layout, 1);
        assert_eq!(hit_test(&other_document, &layout, rect.center()), None);
    }
}
