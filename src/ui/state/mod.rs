// SPDX-License-Identifier: MPL-2.0
//! UI state that is not owned by a single screen.

pub mod viewport;

pub use viewport::ViewportState;
