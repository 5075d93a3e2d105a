// SPDX-License-Identifier: MPL-2.0
//! Builds a document and decodes its images off the UI thread.

use std::fs;
use std::path::{Path, PathBuf};

use super::model::{thumbnail_size, Document, DocumentBuilder, ImageRef};
use super::parse::{parse_markup, Segment};
use crate::error::{Error, Result};
use crate::media::{self, ImageData};

/// What to show in the content host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// The generated demo images.
    Samples,
    /// Image files given directly on the command line.
    Images(Vec<PathBuf>),
    /// A text file with `![alt](path)` markup.
    Markup(PathBuf),
}

impl DocumentSource {
    /// Picks a source from command line paths.
    ///
    /// A single non-image path is a markup document; anything else is a
    /// list of images. No paths means the demo samples.
    #[must_use]
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        match paths.as_slice() {
            [] => DocumentSource::Samples,
            [single] if !media::is_image_path(single) => DocumentSource::Markup(single.clone()),
            _ => DocumentSource::Images(paths),
        }
    }
}

/// An image that could not be decoded and was replaced by the fallback.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub source: ImageRef,
    pub error: Error,
}

/// A built document with one decoded image per placeholder, in order.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub images: Vec<ImageData>,
    pub failures: Vec<LoadFailure>,
    /// File the document was read from, if any.
    pub origin: Option<PathBuf>,
}

/// Accumulates placeholders and their decoded images side by side.
struct Assembly {
    builder: DocumentBuilder,
    images: Vec<ImageData>,
    failures: Vec<LoadFailure>,
}

impl Assembly {
    fn new(intro: &str) -> Self {
        Self {
            builder: DocumentBuilder::new().text(intro),
            images: Vec::new(),
            failures: Vec::new(),
        }
    }

    fn text(mut self, text: impl Into<String>) -> Self {
        self.builder = self.builder.text(text);
        self
    }

    fn image(mut self, source: ImageRef, alt: String, image: ImageData) -> Self {
        let size = thumbnail_size(image.width, image.height);
        self.builder = self.builder.placeholder(source, alt, size);
        self.images.push(image);
        self
    }

    fn image_file(self, path: PathBuf, alt: String) -> Self {
        match media::load_image(&path) {
            Ok(image) => self.image(ImageRef::Path(path), alt, image),
            Err(error) => {
                tracing::warn!("failed to load {}: {}", path.display(), error);
                let source = ImageRef::Path(path);
                let mut assembly = self.image(source.clone(), alt, media::fallback_image());
                assembly.failures.push(LoadFailure { source, error });
                assembly
            }
        }
    }

    fn finish(self, origin: Option<PathBuf>) -> LoadedDocument {
        LoadedDocument {
            document: self.builder.build(),
            images: self.images,
            failures: self.failures,
            origin,
        }
    }
}

fn file_alt(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Loads `source` on the calling thread.
///
/// `intro` is the text placed before generated image lists. Undecodable
/// images are replaced by [`media::fallback_image`] and reported in
/// [`LoadedDocument::failures`]; only an unreadable markup file is an error.
pub fn load_blocking(source: &DocumentSource, intro: &str) -> Result<LoadedDocument> {
    match source {
        DocumentSource::Samples => Ok(media::sample_images()
            .into_iter()
            .enumerate()
            .fold(Assembly::new(intro), |assembly, (n, image)| {
                assembly
                    .image(ImageRef::Sample(n), String::new(), image)
                    .text("\n\n")
            })
            .finish(None)),
        DocumentSource::Images(paths) => Ok(paths
            .iter()
            .fold(Assembly::new(intro), |assembly, path| {
                assembly
                    .image_file(path.clone(), file_alt(path))
                    .text("\n\n")
            })
            .finish(None)),
        DocumentSource::Markup(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| Error::Document(format!("{}: {}", path.display(), err)))?;
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            Ok(parse_markup(&text, base_dir)
                .into_iter()
                .fold(Assembly::new(""), |assembly, segment| match segment {
                    Segment::Text(text) => assembly.text(text),
                    Segment::Image { alt, path } => assembly.image_file(path, alt),
                })
                .finish(Some(path.clone())))
        }
    }
}

/// Loads `source` on the blocking thread pool.
pub async fn load(source: DocumentSource, intro: String) -> Result<LoadedDocument> {
    tokio::task::spawn_blocking(move || load_blocking(&source, &intro))
        .await
        .map_err(|err| Error::Document(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    const INTRO: &str = "Tap images below:\n\n";

    #[test]
    fn samples_follow_the_intro_with_blank_lines() {
        let loaded = load_blocking(&DocumentSource::Samples, INTRO).expect("samples");

        assert_eq!(loaded.images.len(), 3);
        assert_eq!(loaded.document.placeholder_count(), 3);
        assert_eq!(loaded.document.runs()[0], Run::Text(INTRO.to_string()));
        assert_eq!(
            loaded.document.runs().last(),
            Some(&Run::Text("\n\n".to_string()))
        );
        assert!(loaded.failures.is_empty());
    }

    #[test]
    fn thumbnails_are_sized_from_images() {
        let loaded = load_blocking(&DocumentSource::Samples, INTRO).expect("samples");
        for (placeholder, image) in loaded.document.placeholders().zip(&loaded.images) {
            assert_eq!(placeholder.display_size, thumbnail_size(image.width, image.height));
        }
    }

    #[test]
    fn unreadable_images_fall_back_and_are_reported() {
        let dir = tempdir().expect("temp dir");
        let good = dir.path().join("good.png");
        RgbaImage::from_pixel(8, 4, Rgba([1, 2, 3, 255]))
            .save(&good)
            .expect("write png");
        let missing = dir.path().join("missing.png");

        let source = DocumentSource::Images(vec![good, missing.clone()]);
        let loaded = load_blocking(&source, INTRO).expect("load");

        assert_eq!(loaded.images.len(), 2);
        assert_eq!((loaded.images[0].width, loaded.images[0].height), (8, 4));
        assert_eq!(loaded.failures.len(), 1);
        assert_eq!(loaded.failures[0].source, ImageRef::Path(missing));
    }

    #[test]
    fn markup_images_resolve_relative_to_the_document() {
        let dir = tempdir().expect("temp dir");
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
            .save(dir.path().join("dot.png"))
            .expect("write png");
        let doc_path = dir.path().join("notes.txt");
        fs::write(&doc_path, "A dot: ![dot](dot.png) done").expect("write doc");

        let loaded = load_blocking(&DocumentSource::Markup(doc_path.clone()), INTRO).expect("load");

        assert!(loaded.failures.is_empty());
        assert_eq!(loaded.origin, Some(doc_path));
        let placeholder = loaded.document.placeholder(0).expect("placeholder");
        assert_eq!(placeholder.alt, "dot");
        assert_eq!(placeholder.source, ImageRef::Path(dir.path().join("dot.png")));
    }

    #[test]
    fn missing_markup_file_is_a_document_error() {
        let dir = tempdir().expect("temp dir");
        let result = load_blocking(&DocumentSource::Markup(dir.path().join("nope.txt")), INTRO);
        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[test]
    fn source_is_chosen_from_paths() {
        assert_eq!(DocumentSource::from_paths(vec![]), DocumentSource::Samples);
        assert_eq!(
            DocumentSource::from_paths(vec![PathBuf::from("notes.md")]),
            DocumentSource::Markup(PathBuf::from("notes.md"))
        );
        assert_eq!(
            DocumentSource::from_paths(vec![PathBuf::from("a.png")]),
            DocumentSource::Images(vec![PathBuf::from("a.png")])
        );
    }

    #[tokio::test]
    async fn async_load_matches_blocking_load() {
        let loaded = load(DocumentSource::Samples, INTRO.to_string())
            .await
            .expect("samples");
        assert_eq!(loaded.document.placeholder_count(), 3);
    }
}
