// SPDX-License-Identifier: MPL-2.0
//! The images, page and mode of one open gallery.

use super::mode::{ModeEvent, UiMode};
use crate::media::ImageData;

/// Created when a thumbnail is tapped, dropped when the gallery closes.
///
/// The image list is a snapshot: edits to the content host after opening
/// do not reach it.
#[derive(Debug, Clone)]
pub struct GallerySession {
    images: Vec<ImageData>,
    page: usize,
    mode: UiMode,
}

impl GallerySession {
    /// Opens at `initial_page`, clamped into range. `None` without images.
    #[must_use]
    pub fn new(images: Vec<ImageData>, initial_page: usize, show_chrome: bool) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let page = initial_page.min(images.len() - 1);
        Some(Self {
            images,
            page,
            mode: if show_chrome {
                UiMode::Normal
            } else {
                UiMode::Hidden
            },
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.images.len()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn images(&self) -> &[ImageData] {
        &self.images
    }

    pub fn image(&self, page: usize) -> Option<&ImageData> {
        self.images.get(page)
    }

    pub fn current_image(&self) -> &ImageData {
        // `page` is kept in range and the list is never empty.
        &self.images[self.page]
    }

    /// Moves to `page`. Returns false, leaving the page unchanged, if it
    /// is out of range or already current.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= self.images.len() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    /// Feeds `event` to the mode machine; returns the new mode if it changed.
    pub fn apply(&mut self, event: ModeEvent) -> Option<UiMode> {
        let next = self.mode.transition(event)?;
        self.mode = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image;

    fn session(count: usize, page: usize) -> GallerySession {
        GallerySession::new((0..count).map(|_| solid_image(4, 3)).collect(), page, true)
            .expect("images")
    }

    #[test]
    fn initial_page_is_clamped() {
        assert_eq!(session(3, 1).page(), 1);
        assert_eq!(session(3, 7).page(), 2);
        assert!(GallerySession::new(Vec::new(), 0, true).is_none());
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut session = session(3, 0);
        assert!(!session.previous());
        assert_eq!(session.page(), 0);

        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.page(), 2);

        assert!(!session.set_page(3));
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn chrome_preference_picks_the_initial_mode() {
        let hidden = GallerySession::new(vec![solid_image(1, 1)], 0, false).expect("image");
        assert_eq!(hidden.mode(), UiMode::Hidden);
        assert_eq!(session(1, 0).mode(), UiMode::Normal);
    }

    #[test]
    fn ignored_mode_events_leave_the_mode_alone() {
        let mut session = session(1, 0);
        assert_eq!(session.apply(ModeEvent::Save), None);
        assert_eq!(session.mode(), UiMode::Normal);
        assert_eq!(session.apply(ModeEvent::Edit), Some(UiMode::Editing));
        assert_eq!(session.mode(), UiMode::Editing);
    }
}
