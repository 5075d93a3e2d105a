// SPDX-License-Identifier: MPL-2.0
//! Receiving end of the diagnostics channel.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    sanitize_message, AppStateEvent, EventRing, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, SerializableEvent, UserAction,
};

/// Channel slots between handles and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: when the channel is full the
/// event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning; file paths in the message are masked.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: sanitize_message(&message.into()),
        });
    }

    /// Logs an error; file paths in the message are masked.
    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: sanitize_message(&message.into()),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    history: EventRing<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    session_started_at: Instant,
    session_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.history.len())
            .field("limit", &self.history.limit())
            .field("evicted", &self.history.evicted())
            .finish_non_exhaustive()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(super::DEFAULT_BUFFER_CAPACITY)
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            history: EventRing::new(capacity),
            event_rx,
            event_tx,
            session_started_at: Instant::now(),
            session_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the history.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.history.record(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.history.iter()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_report(&self) -> DiagnosticReport {
        let events = self
            .history
            .iter()
            .map(|event| {
                SerializableEvent::new(event.timestamp, self.session_started_at, event.kind.clone())
            })
            .collect();
        DiagnosticReport::from_events(
            self.session_started_at_utc,
            self.session_started_at.elapsed().as_millis() as u64,
            self.history.evicted(),
            events,
        )
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path` through a temporary file.
    pub fn export_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.export_json().map_err(io::Error::other)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_events_reach_history_after_processing() {
        let mut collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();

        handle.log_action(UserAction::OpenGallery { index: 1 });
        handle.log_state(AppStateEvent::GalleryClosed);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn warnings_are_sanitized() {
        let mut collector = DiagnosticsCollector::new(10);
        collector
            .handle()
            .log_warning("failed to decode /home/ada/photo.png");
        collector.process_pending();

        let event = collector.iter().next().expect("one event");
        assert_eq!(
            event.kind,
            DiagnosticEventKind::Warning {
                message: "failed to decode <path>".to_string()
            }
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();
        for _ in 0..CHANNEL_CAPACITY + 20 {
            handle.log_action(UserAction::MissedThumbnail);
        }
        assert_eq!(collector.event_rx.len(), CHANNEL_CAPACITY);
    }

    #[test]
    fn report_counts_events_pushed_out_of_the_history() {
        let mut collector = DiagnosticsCollector::new(2);
        let handle = collector.handle();
        for page in 0..5 {
            handle.log_action(UserAction::ChangePage { page });
        }
        collector.process_pending();

        let report = collector.build_report();
        assert_eq!(report.metadata.event_count, 2);
        assert_eq!(report.metadata.evicted_events, 3);
        assert_eq!(report.summary.page_changes, 2);
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = DiagnosticsCollector::new(10);
        collector
            .handle()
            .log_action(UserAction::ChangePage { page: 2 });
        collector.process_pending();

        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        collector.export_to_file(&path).expect("export");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(json["metadata"]["event_count"], 1);
        assert_eq!(json["metadata"]["evicted_events"], 0);
        assert_eq!(json["events"][0]["action"], "change_page");
        assert_eq!(json["summary"]["page_changes"], 1);
        assert!(!dir.path().join("report.json.tmp").exists());
    }
}
