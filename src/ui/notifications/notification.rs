// SPDX-License-Identifier: MPL-2.0
//! One toast: a localized message, its severity, and when it goes away.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Export saved.
    Success,
    Info,
    /// Something fell back (missing image, unreadable settings, denied
    /// library access) but the app keeps going.
    Warning,
    /// An operation failed outright. Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Info => palette::INFO_500,
            Self::Warning => palette::WARNING_500,
            Self::Error => palette::ERROR_500,
        }
    }

    /// Time on screen before the toast closes itself.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Self::Success | Self::Info => Some(Duration::from_secs(3)),
            Self::Warning => Some(Duration::from_secs(5)),
            Self::Error => None,
        }
    }
}

/// Fluent key plus arguments, resolved when drawn so a language change
/// applies to toasts already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    /// Set once the toast becomes visible; queued toasts do not age.
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::fresh(),
            severity,
            key: key.into(),
            args: Vec::new(),
            shown_at: None,
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument, e.g. the image path for a load warning.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &str {
        &self.key
    }

    pub fn message_args(&self) -> &[(String, String)] {
        &self.args
    }

    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether the toast has been on screen for its whole lifetime by `now`.
    /// A toast that was never shown has not expired.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match (self.shown_at, self.severity.lifetime()) {
            (Some(shown_at), Some(lifetime)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_notification_gets_its_own_id() {
        assert_ne!(Notification::info("a").id(), Notification::info("a").id());
    }

    #[test]
    fn warnings_linger_longer_and_errors_stay() {
        let success = Severity::Success.lifetime().expect("timed");
        let warning = Severity::Warning.lifetime().expect("timed");
        assert!(warning > success);
        assert_eq!(Severity::Error.lifetime(), None);
    }

    #[test]
    fn expiry_counts_from_when_the_toast_was_shown() {
        let shown = Instant::now();
        let mut saved = Notification::success("notification-export-success");
        assert!(!saved.is_expired_at(shown + Duration::from_secs(60)));

        saved.mark_shown(shown);
        assert!(!saved.is_expired_at(shown + Duration::from_secs(2)));
        assert!(saved.is_expired_at(shown + Duration::from_secs(3)));
    }

    #[test]
    fn errors_never_expire() {
        let shown = Instant::now();
        let mut failed = Notification::error("notification-export-write-error");
        failed.mark_shown(shown);
        assert!(!failed.is_expired_at(shown + Duration::from_secs(3600)));
    }

    #[test]
    fn arguments_keep_their_order() {
        let notification = Notification::warning("notification-image-load-error")
            .with_arg("source", "cat.png")
            .with_arg("reason", "truncated");
        assert_eq!(notification.message_args()[0].0, "source");
        assert_eq!(notification.message_args()[1].1, "truncated");
    }
}
