// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the gallery interaction loop.
//!
//! Events (gallery opened, page changes, dismissals, export outcomes,
//! warnings and errors shown to the user) are sent through a
//! [`DiagnosticsHandle`] over a bounded channel, stored in a memory-bounded
//! [`EventRing`] by the [`DiagnosticsCollector`], and can be exported
//! as a JSON report with `--diagnostics <file>`.

mod buffer;
mod collector;
mod events;
mod report;
mod sanitizer;

pub use buffer::EventRing;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent, SessionSummary};
pub use sanitizer::sanitize_message;

/// Number of events kept when no capacity is given.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1000;
