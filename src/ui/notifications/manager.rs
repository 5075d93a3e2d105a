// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Toasts are kept in arrival order. The first [`MAX_VISIBLE`] are on
//! screen; the rest wait their turn and only start aging once shown.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Expires toasts whose time is up.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    toasts: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors warnings and errors into the diagnostics history.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message_key()),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Success | Severity::Info => {}
            }
        }
        self.toasts.push_back(notification);
        self.show_front(now);
    }

    /// Removes a toast, shown or waiting. False if `id` is unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id() != id);
        self.show_front(now);
        self.toasts.len() < before
    }

    /// Drops shown toasts that expired by `now` and lets waiting ones in.
    pub fn tick_at(&mut self, now: Instant) {
        let mut index = 0;
        self.toasts.retain(|toast| {
            let shown = index < MAX_VISIBLE;
            index += 1;
            !(shown && toast.is_expired_at(now))
        });
        self.show_front(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick_at(Instant::now()),
        }
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.toasts.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    fn show_front(&mut self, now: Instant) {
        for toast in self.toasts.iter_mut().take(MAX_VISIBLE) {
            toast.mark_shown(now);
        }
    }
}
