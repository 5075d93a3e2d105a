// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! screen exposes a `Message`, a `State` with `handle_message`, and a
//! `view` function.
//!
//! - [`document_view`] - Scrollable document with inline thumbnails
//! - [`transition_overlay`] - Backdrop and proxy image of the zoom transition
//! - [`notifications`] - Toast notification system for user feedback
//! - [`state`] - Scroll tracking shared with the app
//! - [`styles`] and [`design_tokens`] - Centralized styling constants
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod document_view;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod transition_overlay;
