// SPDX-License-Identifier: MPL-2.0
//! Full-window paged image gallery.

pub mod component;
pub mod gesture;
pub mod mode;
pub mod session;
pub mod view;
pub mod zoom_cell;

pub use component::{DismissCause, Event, Message, State};
pub use mode::{ModeEvent, UiMode};
pub use session::GallerySession;
pub use view::view;
pub use zoom_cell::ZoomCell;
