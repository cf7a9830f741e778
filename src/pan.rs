//! Viewport panning over the surface: drag, touch, wheel and momentum.
//!
//! The offset is the position of the viewport's top-left corner on the
//! surface and always stays within `[0, surface − viewport]`.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::animation::tween::Tween;
use crate::options::{ms, PanOptions};
use crate::util::easing::EasingFunction;

/// Release velocity older than this is treated as zero.
const STALE_SAMPLE: Duration = Duration::from_millis(100);

/// What is driving the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or pen; scaled follow with momentum on release.
    Mouse,
    /// Touch; 1:1 follow, no momentum.
    Touch,
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// Input kind.
    pub kind: PointerKind,
    /// Pointer position at the start of the drag.
    pub anchor: Vec2,
    /// Offset at the start of the drag.
    pub anchor_offset: Vec2,
    /// Offset at the previous sample.
    last_offset: Vec2,
    /// Time of the previous sample.
    last_sample: Instant,
    /// Offset velocity in px/ms.
    velocity: Vec2,
}

/// Pan state machine.
#[derive(Debug, Clone)]
pub enum PanState {
    /// Nothing in motion.
    Idle,
    /// Following a pointer.
    Dragging(Drag),
    /// Gliding after a fast release.
    Settling(Tween<Vec2>),
}

/// Owns the viewport offset and every gesture that moves it.
#[derive(Debug, Clone)]
pub struct PanController {
    options: PanOptions,
    offset: Vec2,
    max_offset: Vec2,
    state: PanState,
    enabled: bool,
    scroll_hint_visible: bool,
}

impl PanController {
    /// A controller for `surface` seen through `viewport`, centered at the
    /// configured anchor.
    #[must_use]
    pub fn new(surface: Vec2, viewport: Vec2, options: PanOptions) -> Self {
        let mut pan = Self {
            options,
            offset: Vec2::ZERO,
            max_offset: Vec2::ZERO,
            state: PanState::Idle,
            enabled: true,
            scroll_hint_visible: true,
        };
        pan.set_bounds(surface, viewport);
        pan.center();
        pan
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Largest allowed offset on each axis.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        self.max_offset
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PanState {
        &self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PanState::Dragging(_))
    }

    /// Whether a momentum glide is in progress.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        matches!(self.state, PanState::Settling(_))
    }

    /// Whether gestures are accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the "drag to explore" hint is still shown.
    #[must_use]
    pub fn scroll_hint_visible(&self) -> bool {
        self.scroll_hint_visible
    }

    /// Replace the gesture parameters. Takes effect on the next gesture.
    pub fn set_options(&mut self, options: PanOptions) {
        self.options = options;
    }

    /// Recompute the scroll range and clamp the offset into it.
    pub fn set_bounds(&mut self, surface: Vec2, viewport: Vec2) {
        self.max_offset = (surface - viewport).max(Vec2::ZERO);
        self.offset = self.clamp(self.offset);
    }

    /// Jump to the configured anchor fraction of the scroll range.
    pub fn center(&mut self) {
        let [ax, ay] = self.options.initial_anchor;
        self.offset = self.clamp(self.max_offset * Vec2::new(ax, ay));
        self.state = PanState::Idle;
        log::debug!("pan centered at {:?}", self.offset);
    }

    /// Enable or disable gesture handling. Disabling cancels any drag or
    /// glide in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.state = PanState::Idle;
        }
    }

    /// Start a drag at `pointer`. The caller has already established that
    /// the pointer is not over a cell.
    pub fn begin_drag(
        &mut self,
        kind: PointerKind,
        pointer: Vec2,
        now: Instant,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        self.state = PanState::Dragging(Drag {
            kind,
            anchor: pointer,
            anchor_offset: self.offset,
            last_offset: self.offset,
            last_sample: now,
            velocity: Vec2::ZERO,
        });
        self.scroll_hint_visible = false;
        true
    }

    /// Follow the pointer during a drag.
    pub fn drag_to(&mut self, pointer: Vec2, now: Instant) {
        let PanState::Dragging(drag) = &self.state else {
            return;
        };
        let mut drag = *drag;
        let sensitivity = match drag.kind {
            PointerKind::Mouse => self.options.mouse_sensitivity,
            PointerKind::Touch => self.options.touch_sensitivity,
        };
        let offset =
            self.clamp(drag.anchor_offset - (pointer - drag.anchor) * sensitivity);

        let dt = now.saturating_duration_since(drag.last_sample).as_secs_f32() * 1000.0;
        if dt > 0.0 {
            drag.velocity = (offset - drag.last_offset) / dt;
            drag.last_offset = offset;
            drag.last_sample = now;
        }
        self.offset = offset;
        self.state = PanState::Dragging(drag);
    }

    /// Release the drag. A fast mouse release starts a momentum glide.
    pub fn end_drag(&mut self, now: Instant) {
        let PanState::Dragging(drag) = &self.state else {
            return;
        };
        let stale = now.saturating_duration_since(drag.last_sample) > STALE_SAMPLE;
        let velocity = if stale { Vec2::ZERO } else { drag.velocity };

        if drag.kind == PointerKind::Touch
            || velocity.length() <= self.options.momentum_threshold
        {
            self.state = PanState::Idle;
            return;
        }
        let target = self.clamp(
            self.offset + velocity * self.options.momentum_extrapolation_ms,
        );
        log::debug!("pan momentum {velocity:?} -> {target:?}");
        self.state = PanState::Settling(Tween::new(
            self.offset,
            target,
            now,
            ms(self.options.momentum_duration_ms),
            EasingFunction::CubicOut,
        ));
    }

    /// Scroll by a wheel delta. Horizontal deltas win when larger; with
    /// `shift` held a vertical delta pans horizontally.
    pub fn wheel(&mut self, delta: Vec2, shift: bool) -> bool {
        if !self.enabled {
            return false;
        }
        let step = if delta.x.abs() > delta.y.abs() {
            Vec2::new(delta.x, 0.0)
        } else if shift {
            Vec2::new(delta.y, 0.0)
        } else {
            Vec2::new(0.0, delta.y)
        };
        if matches!(self.state, PanState::Settling(_)) {
            self.state = PanState::Idle;
        }
        self.offset = self.clamp(self.offset + step);
        self.scroll_hint_visible = false;
        true
    }

    /// Advance a momentum glide. Returns whether the offset is still
    /// moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let PanState::Settling(tween) = &self.state else {
            return false;
        };
        self.offset = self.clamp(tween.sample(now));
        if tween.is_complete(now) {
            self.state = PanState::Idle;
            return false;
        }
        true
    }

    fn clamp(&self, offset: Vec2) -> Vec2 {
        offset.clamp(Vec2::ZERO, self.max_offset)
    }
}
