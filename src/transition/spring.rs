// SPDX-License-Identifier: MPL-2.0
//! Timing curves for transitions.
//!
//! [`SpringCurve`] is the closed-form step response of a damped harmonic
//! oscillator that starts at 0 with a given velocity and rests at 1:
//!
//! ```text
//! ζ < 1:  x(t) = 1 - e^(-ζωt) (cos(ω_d t) + (ζω - v₀)/ω_d · sin(ω_d t))
//! ζ ≥ 1:  x(t) = 1 - e^(-ωt) (1 + (ω - v₀) t)
//! ```
//!
//! The natural frequency ω is chosen so that the decay envelope is down to
//! 0.1 % at the requested duration; from then on the curve is exactly 1.

use std::time::Duration;

/// Envelope left at the end of a spring animation.
const SETTLE_RESIDUAL: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    damping: f32,
    /// Initial velocity in animation distances per second.
    initial_velocity: f32,
    duration: Duration,
    omega: f32,
}

impl SpringCurve {
    /// Creates a spring settling over `duration`.
    ///
    /// `damping` is the damping ratio (1.0 is critical); it is kept above
    /// a small positive floor.
    #[must_use]
    pub fn new(damping: f32, initial_velocity: f32, duration: Duration) -> Self {
        let damping = damping.max(0.05);
        let seconds = duration.as_secs_f32().max(f32::EPSILON);
        let omega = (1.0 / SETTLE_RESIDUAL).ln() / (damping.min(1.0) * seconds);
        Self {
            damping,
            initial_velocity,
            duration,
            omega,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress at `elapsed`: 0 at the start, exactly 1 once the duration
    /// has passed, and possibly above 1 in between when underdamped.
    #[must_use]
    pub fn value(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32();
        let (zeta, omega, v0) = (self.damping, self.omega, self.initial_velocity);

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            let k = (zeta * omega - v0) / omega_d;
            1.0 - envelope * ((omega_d * t).cos() + k * (omega_d * t).sin())
        } else {
            1.0 - (-omega * t).exp() * (1.0 + (omega - v0) * t)
        }
    }
}

/// How a transition maps elapsed time to progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Spring(SpringCurve),
    /// Smoothstep over the duration.
    EaseInOut(Duration),
}

impl Curve {
    #[must_use]
    pub fn duration(&self) -> Duration {
        match self {
            Curve::Spring(spring) => spring.duration(),
            Curve::EaseInOut(duration) => *duration,
        }
    }

    #[must_use]
    pub fn value(&self, elapsed: Duration) -> f32 {
        match self {
            Curve::Spring(spring) => spring.value(elapsed),
            Curve::EaseInOut(duration) => {
                let t = fraction(elapsed, *duration);
                t * t * (3.0 - 2.0 * t)
            }
        }
    }
}

/// `elapsed / duration`, clamped to `0.0..=1.0`.
#[must_use]
pub fn fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PRESENT_DAMPING, PRESENT_DURATION, PRESENT_INITIAL_VELOCITY};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn present() -> SpringCurve {
        SpringCurve::new(PRESENT_DAMPING, PRESENT_INITIAL_VELOCITY, PRESENT_DURATION)
    }

    #[test]
    fn spring_starts_at_zero_and_ends_at_one() {
        let spring = present();
        assert_abs_diff_eq!(spring.value(Duration::ZERO), 0.0, epsilon = F32_EPSILON);
        assert_eq!(spring.value(PRESENT_DURATION), 1.0);
        assert_eq!(spring.value(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn spring_is_nearly_settled_just_before_the_end() {
        let spring = present();
        let almost = PRESENT_DURATION - Duration::from_millis(1);
        assert_abs_diff_eq!(spring.value(almost), 1.0, epsilon = 0.01);
    }

    #[test]
    fn spring_initial_slope_matches_velocity() {
        let spring = SpringCurve::new(0.9, 2.0, Duration::from_millis(350));
        let dt = Duration::from_micros(100);
        let slope = spring.value(dt) / dt.as_secs_f32();
        assert_abs_diff_eq!(slope, 2.0, epsilon = 0.1);
    }

    #[test]
    fn spring_progresses_past_halfway_early() {
        let spring = present();
        assert!(spring.value(PRESENT_DURATION / 3) > 0.5);
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        let spring = SpringCurve::new(1.0, 0.0, Duration::from_millis(300));
        let mut previous = 0.0;
        for ms in 0..300 {
            let value = spring.value(Duration::from_millis(ms));
            assert!(value <= 1.0 + F32_EPSILON);
            assert!(value + F32_EPSILON >= previous);
            previous = value;
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = Curve::EaseInOut(Duration::from_millis(200));
        assert_eq!(curve.value(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(curve.value(Duration::from_millis(100)), 0.5);
        assert_eq!(curve.value(Duration::from_millis(400)), 1.0);
    }
}
