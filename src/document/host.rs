// SPDX-License-Identifier: MPL-2.0
//! The content host: a laid-out document and its placeholder images.

use iced::{Point, Rectangle, Size, Vector};

use super::hit_test::{hit_test, Hit};
use super::layout::{Layout, LayoutMetrics};
use super::loader::LoadedDocument;
use super::model::Document;
use crate::media::ImageData;

#[derive(Debug, Clone)]
pub struct ContentHost {
    document: Document,
    /// Placeholder index and image, in gallery order.
    images: Vec<(usize, ImageData)>,
    layout: Layout,
    width: f32,
}

impl ContentHost {
    /// Pairs each placeholder with the image at the same position.
    ///
    /// Placeholders without an image are dropped from the mapping, extra
    /// images are ignored.
    #[must_use]
    pub fn new(document: Document, images: Vec<ImageData>, width: f32) -> Self {
        let images = document
            .placeholders()
            .map(|placeholder| placeholder.index)
            .zip(images)
            .collect();
        let layout = Layout::compute(&document, width, LayoutMetrics::default());
        Self {
            document,
            images,
            layout,
            width,
        }
    }

    #[must_use]
    pub fn from_loaded(loaded: LoadedDocument, width: f32) -> Self {
        Self::new(loaded.document, loaded.images, width)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// Recomputes the layout when the available width changes.
    pub fn relayout(&mut self, width: f32) {
        if (width - self.width).abs() > f32::EPSILON {
            self.width = width;
            self.layout = Layout::compute(&self.document, width, self.layout.metrics());
        }
    }

    /// Resolves a click in host-local coordinates.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        hit_test(&self.document, &self.layout, point)
    }

    pub fn image(&self, index: usize) -> Option<&ImageData> {
        self.images
            .iter()
            .find_map(|(i, image)| (*i == index).then_some(image))
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Copies the ordered image list for a gallery session.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ImageData> {
        self.images.iter().map(|(_, image)| image.clone()).collect()
    }

    /// Host-local rectangle of the placeholder at `index`.
    pub fn placeholder_frame(&self, index: usize) -> Option<Rectangle> {
        let inset = self.layout.metrics().inset;
        self.layout
            .placeholder_rect(index)
            .map(|rect| rect + Vector::new(inset.x, inset.y))
    }

    /// Swaps the image shown for placeholder `index`. Returns false if
    /// there is no such placeholder.
    #[cfg(test)]
    pub(crate) fn replace_image(&mut self, index: usize, image: ImageData) -> bool {
        match self.images.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => {
                entry.1 = image;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::loader::{load_blocking, DocumentSource};
    use crate::test_utils::solid_image;

    fn sample_host() -> ContentHost {
        let loaded = load_blocking(&DocumentSource::Samples, "Tap images below:\n\n").expect("samples");
        ContentHost::from_loaded(loaded, 480.0)
    }

    #[test]
    fn images_are_mapped_to_placeholder_indices() {
        let host = sample_host();
        assert_eq!(host.image_count(), 3);
        for index in 0..3 {
            assert!(host.image(index).is_some());
        }
        assert!(host.image(3).is_none());
    }

    #[test]
    fn hit_on_placeholder_frame_returns_its_index() {
        let host = sample_host();
        let frame = host.placeholder_frame(1).expect("frame");
        let hit = host.hit_test(frame.center()).expect("hit");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.frame, frame);
    }

    #[test]
    fn snapshot_is_isolated_from_later_host_changes() {
        let mut host = sample_host();
        let snapshot = host.snapshot();
        let before: Vec<_> = snapshot.iter().map(|i| (i.width, i.height)).collect();

        assert!(host.replace_image(0, solid_image(7, 7)));

        let after: Vec<_> = snapshot.iter().map(|i| (i.width, i.height)).collect();
        assert_eq!(before, after);
        assert!(!snapshot[0].shares_pixels(host.image(0).expect("image")));
    }

    #[test]
    fn relayout_shrinks_placeholders_to_narrow_widths() {
        let mut host = sample_host();
        assert_eq!(host.placeholder_frame(0).expect("frame").width, 150.0);

        host.relayout(120.0);

        // 120 px minus two 20 px insets.
        assert_eq!(host.placeholder_frame(0).expect("frame").width, 80.0);
        assert_eq!(host.content_size().width, 120.0);
    }

    #[test]
    fn replacing_an_unknown_placeholder_fails() {
        let mut host = sample_host();
        assert!(!host.replace_image(9, solid_image(1, 1)));
    }
}
