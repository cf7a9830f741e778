//! Opacity fader for overlay chrome (filter bar, caption, about panel).

use web_time::{Duration, Instant};

use super::tween::Tween;
use crate::util::easing::EasingFunction;

/// An opacity value that can be faded over time.
#[derive(Debug, Clone)]
pub struct Fade {
    tween: Tween<f32>,
}

impl Fade {
    /// A fade resting at `opacity`.
    #[must_use]
    pub fn new(opacity: f32, now: Instant) -> Self {
        Self {
            tween: Tween::settled(opacity, now),
        }
    }

    /// Opacity at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        self.tween.sample(now)
    }

    /// The opacity the fade is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        *self.tween.target()
    }

    /// Start fading from the current value toward `target`.
    pub fn fade_to(
        &mut self,
        now: Instant,
        target: f32,
        duration: Duration,
        delay: Duration,
    ) {
        self.tween = self
            .tween
            .retarget(now, target, duration, EasingFunction::CubicOut)
            .with_delay(delay);
    }

    /// Whether the fade has finished moving.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.tween.is_complete(now)
    }

    /// Whether the fade has finished and rests at zero.
    #[must_use]
    pub fn is_hidden(&self, now: Instant) -> bool {
        self.is_settled(now) && self.target() <= 0.0
    }
}
