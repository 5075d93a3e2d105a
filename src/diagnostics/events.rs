// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Interactions performed by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A thumbnail was clicked and resolved to a placeholder.
    OpenGallery { index: usize },

    /// A click in the document did not hit any thumbnail.
    MissedThumbnail,

    /// The gallery moved to another page.
    ChangePage { page: usize },

    /// Toolbars were shown or hidden.
    ToggleChrome { visible: bool },

    /// Editing mode was entered.
    EnterEditing,

    /// Editing mode was left without saving.
    CancelEditing,

    /// The sepia export was requested.
    SaveEdited { page: usize },

    /// The gallery was asked to close.
    Dismiss { cause: String },
}

/// Application-level state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// A document finished loading.
    DocumentLoaded { placeholders: usize },

    /// The presenting transition finished; the gallery is interactive.
    GalleryPresented { page_count: usize },

    /// The dismissing transition finished; the session was dropped.
    GalleryClosed,

    /// A transition was skipped because an endpoint was unavailable.
    TransitionAborted { reason: String },

    /// The photo library accepted an exported image.
    ExportSucceeded,

    /// An export did not complete.
    ExportFailed { reason: String },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
    },
    AppState {
        #[serde(flatten)]
        state: AppStateEvent,
    },
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}
