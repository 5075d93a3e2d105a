// SPDX-License-Identifier: MPL-2.0
//! Documents mixing text with inline image placeholders.
//!
//! A [`Document`] is an ordered list of runs. Placeholders are numbered by
//! the [`DocumentBuilder`] in reading order; that number is the page the
//! gallery opens on. The [`ContentHost`] pairs a document with its decoded
//! images and the flow [`Layout`](layout::Layout) used both to draw the
//! text and to resolve clicks.

pub mod hit_test;
pub mod host;
pub mod layout;
pub mod loader;
pub mod model;
pub mod parse;

pub use hit_test::{hit_test, Hit};
pub use host::ContentHost;
pub use layout::{Layout, LayoutMetrics, Slot, SlotKind};
pub use loader::{DocumentSource, LoadFailure, LoadedDocument};
pub use model::{Document, DocumentBuilder, ImageRef, Placeholder, PlaceholderId, Run};
