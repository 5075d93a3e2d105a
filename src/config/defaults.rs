// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Document**: Content host insets and thumbnail sizing
//! - **Zoom**: Zoom cell scale bounds
//! - **Gestures**: Dismiss and paging thresholds
//! - **Transitions**: Spring curve parameters and durations
//! - **Export**: Sepia filter intensity

use std::time::Duration;

// ==========================================================================
// Document Defaults
// ==========================================================================

/// Inset between the content host edge and the laid-out text (left/right).
pub const DOCUMENT_INSET_X: f32 = 20.0;

/// Inset between the content host edge and the laid-out text (top/bottom).
pub const DOCUMENT_INSET_Y: f32 = 20.0;

/// Maximum display width of an inline thumbnail.
pub const THUMBNAIL_MAX_WIDTH: f32 = 150.0;

/// Horizontal advance of one character in the document layout.
pub const DOCUMENT_CHAR_WIDTH: f32 = 9.0;

/// Height of one text line in the document layout.
pub const DOCUMENT_LINE_HEIGHT: f32 = 22.0;

/// Font size used to render document text.
pub const DOCUMENT_FONT_SIZE: f32 = 15.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum zoom scale of a gallery page (1.0 = fitted to the window).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Default maximum zoom scale of a gallery page.
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 3.0;

/// Upper bound accepted for the configurable maximum zoom scale.
pub const MAX_ZOOM_SCALE_LIMIT: f32 = 8.0;

/// Zoom scale reached by a double click on a fitted page.
pub const DOUBLE_CLICK_ZOOM_SCALE: f32 = 2.0;

/// Multiplicative zoom change per wheel line.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Presentation-only scale applied to a page while in editing mode.
pub const EDITING_SHRINK_SCALE: f32 = 0.85;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Vertical translation (px) beyond which releasing a pan dismisses.
pub const DISMISS_TRANSLATION_THRESHOLD: f32 = 150.0;

/// Downward velocity (px/s) beyond which releasing a pan dismisses.
pub const DISMISS_VELOCITY_THRESHOLD: f32 = 500.0;

/// Vertical translation (px) over which the backdrop fades.
pub const DIMMING_DISTANCE: f32 = 400.0;

/// Lowest backdrop alpha reached while dragging.
pub const DIMMING_FLOOR: f32 = 0.2;

/// Movement (px) a press must exceed before it becomes a drag.
pub const DRAG_SLOP: f32 = 8.0;

/// Fraction of the page width a horizontal drag must cover to change page.
pub const PAGE_SWIPE_FRACTION: f32 = 0.2;

/// Horizontal velocity (px/s) that changes page regardless of distance.
pub const PAGE_SWIPE_VELOCITY: f32 = 500.0;

/// Maximum delay between two clicks recognized as a double click.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the zoom-in presentation.
pub const PRESENT_DURATION: Duration = Duration::from_millis(350);

/// Damping ratio of the zoom-in presentation spring.
pub const PRESENT_DAMPING: f32 = 0.9;

/// Initial velocity of the zoom-in presentation spring.
pub const PRESENT_INITIAL_VELOCITY: f32 = 0.6;

/// Duration of the zoom-out dismissal back to the thumbnail.
pub const DISMISS_ZOOM_DURATION: Duration = Duration::from_millis(300);

/// Damping ratio of the zoom-out dismissal spring.
pub const DISMISS_ZOOM_DAMPING: f32 = 0.9;

/// Initial velocity of the zoom-out dismissal spring.
pub const DISMISS_ZOOM_INITIAL_VELOCITY: f32 = 0.8;

/// Duration of the fade-out used when no thumbnail frame is known.
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(300);

/// Duration of the slide-down after a pan dismissal.
pub const SLIDE_OUT_DURATION: Duration = Duration::from_millis(250);

/// Duration of the snap-back after an aborted pan or swipe.
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(250);

/// Damping ratio used for snap-back springs.
pub const SNAP_BACK_DAMPING: f32 = 0.85;

/// Interval of the animation tick subscription.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default sepia tone intensity (0.0 = unchanged, 1.0 = full sepia).
pub const DEFAULT_SEPIA_INTENSITY: f32 = 0.8;

/// Folder created under the user's pictures directory for exports.
pub const EXPORT_FOLDER_NAME: &str = "InlineLens";
