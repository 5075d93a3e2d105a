// SPDX-License-Identifier: MPL-2.0
//! Reads the `![alt](path)` image markup of text documents.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Image { alt: String, path: PathBuf },
}

/// Splits `text` into text and image segments.
///
/// Relative image paths are resolved against `base_dir`. Markup that is
/// not closed is kept as text.
#[must_use]
pub fn parse_markup(text: &str, base_dir: &Path) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut rest = text;

    while let Some(start) = rest.find("![") {
        let Some((alt, path, consumed)) = parse_image(&rest[start..]) else {
            pending.push_str(&rest[..start + 2]);
            rest = &rest[start + 2..];
            continue;
        };

        pending.push_str(&rest[..start]);
        if !pending.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut pending)));
        }
        let path = Path::new(path);
        segments.push(Segment::Image {
            alt: alt.to_string(),
            path: if path.is_absolute() {
                path.to_path_buf()
            } else {
                base_dir.join(path)
            },
        });
        rest = &rest[start + consumed..];
    }

    pending.push_str(rest);
    if !pending.is_empty() {
        segments.push(Segment::Text(pending));
    }
    segments
}

/// Parses `![alt](path)` at the start of `input`, returning the alt text,
/// the path and the number of bytes consumed.
fn parse_image(input: &str) -> Option<(&str, &str, usize)> {
    let body = input.strip_prefix("![")?;
    let alt_end = body.find(']')?;
    let alt = &body[..alt_end];
    if alt.contains('\n') {
        return None;
    }
    let after_alt = body[alt_end + 1..].strip_prefix('(')?;
    let path_end = after_alt.find(')')?;
    let path = after_alt[..path_end].trim();
    if path.is_empty() || path.contains('\n') {
        return None;
    }
    let consumed = 2 + alt_end + 2 + path_end + 1;
    Some((alt, path, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_images_alternate() {
        let segments = parse_markup("Look:\n![cat](cat.png) and ![dog](/abs/dog.jpg)!", Path::new("/docs"));
        assert_eq!(
            segments,
            vec![
                Segment::Text("Look:\n".into()),
                Segment::Image {
                    alt: "cat".into(),
                    path: PathBuf::from("/docs/cat.png")
                },
                Segment::Text(" and ".into()),
                Segment::Image {
                    alt: "dog".into(),
                    path: PathBuf::from("/abs/dog.jpg")
                },
                Segment::Text("!".into()),
            ]
        );
    }

    #[test]
    fn unclosed_markup_stays_text() {
        let segments = parse_markup("broken ![alt](oops and ![x]", Path::new("/"));
        assert_eq!(
            segments,
            vec![Segment::Text("broken ![alt](oops and ![x]".into())]
        );
    }

    #[test]
    fn empty_alt_is_allowed() {
        let segments = parse_markup("![](a.png)", Path::new("/d"));
        assert_eq!(
            segments,
            vec![Segment::Image {
                alt: String::new(),
                path: PathBuf::from("/d/a.png")
            }]
        );
    }
}
