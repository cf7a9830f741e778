//! A single timed interpolation between two values.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Values that can be linearly interpolated.
pub trait Lerp: Clone {
    /// Interpolate from `self` toward `other` by `t` (0 = self, 1 = other).
    #[must_use]
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }
}

/// Animates a value from `from` to `to`.
///
/// A tween holds:
/// - start and target values
/// - the start instant, an optional delay before motion begins, and the
///   duration of the motion itself
/// - the easing curve applied to the normalized progress
///
/// Sampling at or after the end returns `to` exactly (a clone, never a
/// re-interpolated value), so restoring animations land on bit-identical
/// targets.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    delay: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Start a new tween at `start`.
    pub fn new(
        from: T,
        to: T,
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start,
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// A tween that is already complete and holds `value`.
    pub fn settled(value: T, now: Instant) -> Self {
        Self::new(
            value.clone(),
            value,
            now,
            Duration::ZERO,
            EasingFunction::Linear,
        )
    }

    /// Postpone the start of the motion by `delay`.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Normalized progress (0.0 to 1.0), 0 while still in the delay.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let running = elapsed - self.delay;
        (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The interpolated value at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to.clone();
        }
        if t <= 0.0 {
            return self.from.clone();
        }
        self.from.lerp(&self.to, self.easing.evaluate(t))
    }

    /// The value this tween ends on.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }

    /// The instant at which the tween completes.
    #[must_use]
    pub fn end_time(&self) -> Instant {
        self.start + self.delay + self.duration
    }

    /// A new tween starting from wherever this one is at `now`.
    #[must_use]
    pub fn retarget(
        &self,
        now: Instant,
        to: T,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self::new(self.sample(now), to, now, duration, easing)
    }
}
