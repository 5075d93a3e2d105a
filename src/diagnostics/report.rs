// SPDX-License-Identifier: MPL-2.0
//! JSON report written on exit when `--diagnostics` is given.
//!
//! Besides the raw event list the report carries a [`SessionSummary`]
//! folded from the same events, so a reader can see at a glance how many
//! galleries were opened and how exports went.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppStateEvent, DiagnosticEventKind, UserAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// RFC 3339.
    pub generated_at: String,
    pub app_version: String,
    /// RFC 3339.
    pub session_started_at: String,
    pub session_duration_ms: u64,
    pub event_count: usize,
    /// Older events dropped from the history before the report was built.
    pub evicted_events: u64,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        session_started_at: DateTime<Utc>,
        session_duration_ms: u64,
        event_count: usize,
        evicted_events: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            session_started_at: session_started_at.to_rfc3339(),
            session_duration_ms,
            event_count,
            evicted_events,
        }
    }
}

/// Counters derived from the buffered events.
///
/// Only reflects what is still in the ring buffer; older events that were
/// evicted are not counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub galleries_opened: usize,
    pub missed_taps: usize,
    pub page_changes: usize,
    /// Keyed by dismiss cause (`pan`, `close_button`, `escape`).
    pub dismissals: BTreeMap<String, usize>,
    pub transitions_aborted: usize,
    pub exports_succeeded: usize,
    pub exports_failed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl SessionSummary {
    pub fn record(&mut self, kind: &DiagnosticEventKind) {
        match kind {
            DiagnosticEventKind::UserAction { action } => match action {
                UserAction::OpenGallery { .. } => self.galleries_opened += 1,
                UserAction::MissedThumbnail => self.missed_taps += 1,
                UserAction::ChangePage { .. } => self.page_changes += 1,
                UserAction::Dismiss { cause } => {
                    *self.dismissals.entry(cause.clone()).or_default() += 1;
                }
                UserAction::ToggleChrome { .. }
                | UserAction::EnterEditing
                | UserAction::CancelEditing
                | UserAction::SaveEdited { .. } => {}
            },
            DiagnosticEventKind::AppState { state } => match state {
                AppStateEvent::TransitionAborted { .. } => self.transitions_aborted += 1,
                AppStateEvent::ExportSucceeded => self.exports_succeeded += 1,
                AppStateEvent::ExportFailed { .. } => self.exports_failed += 1,
                AppStateEvent::DocumentLoaded { .. }
                | AppStateEvent::GalleryPresented { .. }
                | AppStateEvent::GalleryClosed => {}
            },
            DiagnosticEventKind::Warning { .. } => self.warnings += 1,
            DiagnosticEventKind::Error { .. } => self.errors += 1,
        }
    }
}

/// An event stamped with milliseconds since the session started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(at: Instant, session_start: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp_ms: at.saturating_duration_since(session_start).as_millis() as u64,
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: SessionSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    /// Builds the report and its summary from events in buffer order.
    #[must_use]
    pub fn from_events(
        session_started_at: DateTime<Utc>,
        session_duration_ms: u64,
        evicted_events: u64,
        events: Vec<SerializableEvent>,
    ) -> Self {
        let mut summary = SessionSummary::default();
        for event in &events {
            summary.record(&event.kind);
        }
        Self {
            metadata: ReportMetadata::new(
                session_started_at,
                session_duration_ms,
                events.len(),
                evicted_events,
            ),
            summary,
            events,
        }
    }
}
