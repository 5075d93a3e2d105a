// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - visible/queued lifecycle and auto-dismiss
//! - [`toast`] - rendering
//!
//! Success and info toasts last 3 s, warnings 5 s, errors until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
