// SPDX-License-Identifier: MPL-2.0
//! What the window is showing.

/// Derived from which parts of the app state are populated, so it can
/// never disagree with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the document and its images.
    Loading,
    /// The document is interactive.
    Document,
    /// A thumbnail is zooming into the gallery.
    Presenting,
    /// The gallery is interactive.
    Gallery,
    /// The gallery is zooming or sliding away.
    Dismissing,
}

impl Phase {
    /// True when the document canvas should react to clicks.
    #[must_use]
    pub fn document_is_interactive(self) -> bool {
        self == Phase::Document
    }

    /// True when the gallery or its transition is on screen.
    #[must_use]
    pub fn shows_gallery_layer(self) -> bool {
        matches!(
            self,
            Phase::Presenting | Phase::Gallery | Phase::Dismissing
        )
    }
}
