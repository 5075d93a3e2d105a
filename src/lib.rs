// SPDX-License-Identifier: MPL-2.0
//! `inline_lens` is a document viewer built with the Iced GUI framework.
//!
//! Documents mix text with inline image thumbnails. Clicking a thumbnail
//! zooms it into a full-window gallery that pages horizontally, zooms with
//! the wheel or a double click, and closes with a downward drag. An edit
//! mode applies a sepia tone and exports the result to a photo library.
//!
//! The interaction logic (hit testing, transitions, gallery state machine,
//! gesture thresholds) lives in plain state types so it can be tested
//! without a window; the `app` module wires it into the Iced runtime.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod export;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod transition;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
