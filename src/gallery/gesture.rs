// SPDX-License-Identifier: MPL-2.0
//! Pointer drag tracking and the decisions taken on release.

use std::time::{Duration, Instant};

use iced::{Point, Vector};

use crate::config::{
    DIMMING_DISTANCE, DIMMING_FLOOR, DISMISS_TRANSLATION_THRESHOLD, DISMISS_VELOCITY_THRESHOLD,
    DRAG_SLOP, PAGE_SWIPE_FRACTION, PAGE_SWIPE_VELOCITY,
};

/// A release this long after the last movement has no velocity.
const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// Weight of the newest sample in the velocity estimate.
const VELOCITY_SMOOTHING: f32 = 0.6;

/// Whether a released vertical pan closes the gallery.
#[must_use]
pub fn should_dismiss(translation_y: f32, velocity_y: f32) -> bool {
    translation_y > DISMISS_TRANSLATION_THRESHOLD || velocity_y > DISMISS_VELOCITY_THRESHOLD
}

/// Backdrop opacity while the page is dragged `translation_y` pixels.
#[must_use]
pub fn background_alpha(translation_y: f32) -> f32 {
    (1.0 - translation_y.abs() / DIMMING_DISTANCE).clamp(DIMMING_FLOOR, 1.0)
}

/// Which interaction owns a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Still inside the drag slop.
    Undecided,
    /// Pan-to-dismiss.
    Vertical,
    /// Paging.
    Horizontal,
    /// Moving a zoomed-in image.
    Pan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Previous,
    Stay,
}

/// Where a horizontal drag released with `translation_x` and `velocity_x`
/// should land, for pages `page_width` pixels wide.
///
/// A fast flick wins over distance, so a short flick back cancels a long
/// drag.
#[must_use]
pub fn swipe_outcome(translation_x: f32, velocity_x: f32, page_width: f32) -> SwipeOutcome {
    let by_sign = |value: f32| {
        if value < 0.0 {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Previous
        }
    };

    if velocity_x.abs() > PAGE_SWIPE_VELOCITY {
        by_sign(velocity_x)
    } else if translation_x.abs() > page_width * PAGE_SWIPE_FRACTION {
        by_sign(translation_x)
    } else {
        SwipeOutcome::Stay
    }
}

/// One left-button drag, from press to release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    start: Point,
    started_at: Instant,
    last: Point,
    last_at: Instant,
    translation: Vector,
    velocity: Vector,
    axis: Axis,
}

impl DragGesture {
    /// Starts tracking at `position`. Drags on a zoomed page pan the image.
    #[must_use]
    pub fn begin(position: Point, now: Instant, zoomed: bool) -> Self {
        Self {
            start: position,
            started_at: now,
            last: position,
            last_at: now,
            translation: Vector::ZERO,
            velocity: Vector::ZERO,
            axis: if zoomed { Axis::Pan } else { Axis::Undecided },
        }
    }

    /// Records a new pointer position and returns the movement since the
    /// previous one.
    pub fn update(&mut self, position: Point, now: Instant) -> Vector {
        let delta = position - self.last;
        let dt = now.saturating_duration_since(self.last_at).as_secs_f32();
        if dt > 0.0 {
            let instant = Vector::new(delta.x / dt, delta.y / dt);
            self.velocity = Vector::new(
                self.velocity.x + (instant.x - self.velocity.x) * VELOCITY_SMOOTHING,
                self.velocity.y + (instant.y - self.velocity.y) * VELOCITY_SMOOTHING,
            );
        }

        self.last = position;
        self.last_at = now;
        self.translation = position - self.start;

        if self.axis == Axis::Undecided
            && self.translation.x.hypot(self.translation.y) > DRAG_SLOP
        {
            self.axis = if self.translation.y.abs() > self.translation.x.abs() {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
        }
        delta
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// True while the pointer has not left the drag slop, so a release is
    /// a click.
    pub fn is_click(&self) -> bool {
        self.axis == Axis::Undecided
            || (self.axis == Axis::Pan
                && self.translation.x.hypot(self.translation.y) <= DRAG_SLOP)
    }

    /// Velocity at release time; zero if the pointer stopped before letting go.
    pub fn release_velocity(&self, now: Instant) -> Vector {
        if now.saturating_duration_since(self.last_at) > VELOCITY_STALE_AFTER {
            Vector::ZERO
        } else {
            self.velocity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn drag_to(points: &[(f32, f32)], step: Duration) -> (DragGesture, Instant) {
        let mut now = Instant::now();
        let mut gesture = DragGesture::begin(Point::new(points[0].0, points[0].1), now, false);
        for &(x, y) in &points[1..] {
            now += step;
            gesture.update(Point::new(x, y), now);
        }
        (gesture, now)
    }

    #[test]
    fn dismiss_threshold_on_translation_and_velocity() {
        assert!(should_dismiss(151.0, 0.0));
        assert!(!should_dismiss(149.0, 0.0));
        assert!(should_dismiss(0.0, 501.0));
        assert!(!should_dismiss(0.0, 499.0));
        // Upward movement never dismisses.
        assert!(!should_dismiss(-300.0, -900.0));
    }

    #[test]
    fn dimming_follows_distance_with_a_floor() {
        assert_abs_diff_eq!(background_alpha(0.0), 1.0);
        assert_abs_diff_eq!(background_alpha(200.0), 0.5);
        assert_abs_diff_eq!(background_alpha(-200.0), 0.5);
        assert_abs_diff_eq!(background_alpha(800.0), 0.2);
    }

    #[test]
    fn axis_is_decided_after_the_slop() {
        let (gesture, _) = drag_to(&[(0.0, 0.0), (3.0, 4.0)], Duration::from_millis(16));
        assert_eq!(gesture.axis(), Axis::Undecided);
        assert!(gesture.is_click());

        let (gesture, _) = drag_to(
            &[(0.0, 0.0), (2.0, 6.0), (3.0, 40.0)],
            Duration::from_millis(16),
        );
        assert_eq!(gesture.axis(), Axis::Vertical);

        let (gesture, _) = drag_to(&[(0.0, 0.0), (-30.0, 5.0)], Duration::from_millis(16));
        assert_eq!(gesture.axis(), Axis::Horizontal);
    }

    #[test]
    fn axis_stays_owned_once_decided() {
        let (mut gesture, now) = drag_to(&[(0.0, 0.0), (0.0, 20.0)], Duration::from_millis(16));
        gesture.update(Point::new(300.0, 25.0), now + Duration::from_millis(16));
        assert_eq!(gesture.axis(), Axis::Vertical);
    }

    #[test]
    fn zoomed_drags_pan() {
        let mut gesture = DragGesture::begin(Point::ORIGIN, Instant::now(), true);
        let delta = gesture.update(Point::new(10.0, -5.0), Instant::now());
        assert_eq!(gesture.axis(), Axis::Pan);
        assert_eq!(delta, Vector::new(10.0, -5.0));
    }

    #[test]
    fn velocity_is_zero_after_a_pause() {
        let (gesture, now) = drag_to(
            &[(0.0, 0.0), (0.0, 20.0), (0.0, 40.0)],
            Duration::from_millis(20),
        );
        assert!(gesture.release_velocity(now).y > 500.0);
        assert_eq!(
            gesture.release_velocity(now + Duration::from_millis(200)),
            Vector::ZERO
        );
    }

    #[test]
    fn swipes_use_distance_or_flick_speed() {
        assert_eq!(swipe_outcome(-250.0, 0.0, 1000.0), SwipeOutcome::Next);
        assert_eq!(swipe_outcome(250.0, 0.0, 1000.0), SwipeOutcome::Previous);
        assert_eq!(swipe_outcome(-150.0, 0.0, 1000.0), SwipeOutcome::Stay);
        assert_eq!(swipe_outcome(-20.0, -800.0, 1000.0), SwipeOutcome::Next);
        assert_eq!(swipe_outcome(-300.0, 800.0, 1000.0), SwipeOutcome::Previous);
    }
}
