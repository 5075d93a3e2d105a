// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::THUMBNAIL_MAX_WIDTH;

static NEXT_PLACEHOLDER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identity of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderId(u64);

impl PlaceholderId {
    fn next() -> Self {
        Self(NEXT_PLACEHOLDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a placeholder's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Path(PathBuf),
    /// One of the generated demo images.
    Sample(usize),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Path(path) => write!(f, "{}", path.display()),
            ImageRef::Sample(n) => write!(f, "sample #{}", n + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Position among the document's placeholders, from 0.
    pub index: usize,
    pub id: PlaceholderId,
    pub source: ImageRef,
    pub alt: String,
    pub display_size: Size,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    Text(String),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    runs: Vec<Run>,
}

impl Document {
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.runs.iter().filter_map(|run| match run {
            Run::Placeholder(placeholder) => Some(placeholder),
            Run::Text(_) => None,
        })
    }

    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }

    pub fn placeholder(&self, index: usize) -> Option<&Placeholder> {
        self.placeholders().find(|p| p.index == index)
    }

    /// Maps a placeholder identity back to its index.
    pub fn index_of(&self, id: PlaceholderId) -> Option<usize> {
        self.placeholders().find(|p| p.id == id).map(|p| p.index)
    }
}

/// Thumbnail size for an image: at most [`THUMBNAIL_MAX_WIDTH`] wide,
/// keeping the aspect ratio.
#[must_use]
pub fn thumbnail_size(width: u32, height: u32) -> Size {
    if width == 0 || height == 0 {
        return Size::new(THUMBNAIL_MAX_WIDTH, THUMBNAIL_MAX_WIDTH);
    }
    let display_width = THUMBNAIL_MAX_WIDTH.min(width as f32);
    Size::new(
        display_width,
        display_width * height as f32 / width as f32,
    )
}

/// Assembles a [`Document`], numbering placeholders in insertion order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    runs: Vec<Run>,
    next_index: usize,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text, merging it with a preceding text run.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        match self.runs.last_mut() {
            Some(Run::Text(previous)) => previous.push_str(&text),
            _ => self.runs.push(Run::Text(text)),
        }
        self
    }

    #[must_use]
    pub fn placeholder(mut self, source: ImageRef, alt: impl Into<String>, display_size: Size) -> Self {
        self.runs.push(Run::Placeholder(Placeholder {
            index: self.next_index,
            id: PlaceholderId::next(),
            source,
            alt: alt.into(),
            display_size,
        }));
        self.next_index += 1;
        self
    }

    #[must_use]
    pub fn build(self) -> Document {
        Document { runs: self.runs }
    }
}
