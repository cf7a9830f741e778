//! Per-cell visual state on the pannable surface.
//!
//! Every artwork has exactly one rendered cell. A cell's [`CellVisual`] is
//! its transform and opacity relative to its layout slot; it is written
//! either by an in-flight tween (filter, focus and scatter animations) or
//! directly by the parallax loop when no tween is running.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::animation::tween::{Lerp, Tween};
use crate::layout::GridLayout;
use crate::store::CellId;
use crate::util::easing::EasingFunction;
use crate::util::rect::Rect;

/// Transform and opacity of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    /// Translation from the layout slot, in surface pixels.
    pub offset: Vec2,
    /// Uniform scale about the cell center.
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl CellVisual {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Same transform, different opacity.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    /// Same opacity and rotation, different scale.
    #[must_use]
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// The visual a filter dictates: full when visible, hidden and
    /// shrunk to `hidden_scale` otherwise. Offset and rotation are kept.
    #[must_use]
    pub fn filtered(self, visible: bool, hidden_scale: f32) -> Self {
        if visible {
            Self {
                scale: 1.0,
                opacity: 1.0,
                ..self
            }
        } else {
            Self {
                scale: hidden_scale,
                opacity: 0.0,
                ..self
            }
        }
    }
}

impl Default for CellVisual {
    fn default() -> Self {
        Self::REST
    }
}

impl Lerp for CellVisual {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            offset: Lerp::lerp(&self.offset, &other.offset, t),
            scale: Lerp::lerp(&self.scale, &other.scale, t),
            rotation: Lerp::lerp(&self.rotation, &other.rotation, t),
            opacity: Lerp::lerp(&self.opacity, &other.opacity, t),
        }
    }
}

/// Timing of one cell animation.
#[derive(Debug, Clone, Copy)]
pub struct CellMotion {
    /// Duration of the motion.
    pub duration: Duration,
    /// Delay before the motion starts.
    pub delay: Duration,
    /// Easing curve.
    pub easing: EasingFunction,
}

impl CellMotion {
    /// Ease-out motion of `duration` after `delay`.
    #[must_use]
    pub fn new(duration: Duration, delay: Duration) -> Self {
        Self {
            duration,
            delay,
            easing: EasingFunction::CubicOut,
        }
    }
}

#[derive(Debug, Clone)]
struct Cell {
    visual: CellVisual,
    tween: Option<Tween<CellVisual>>,
    filtered_out: bool,
    /// `filtered_out` value to commit when the tween completes.
    flag_on_complete: Option<bool>,
}

/// All rendered cells, indexed by [`CellId`].
#[derive(Debug, Clone)]
pub struct Surface {
    cells: Vec<Cell>,
}

impl Surface {
    /// `count` cells at rest.
    #[must_use]
    pub fn new(count: usize) -> Self {
        let cells = (0..count)
            .map(|_| Cell {
                visual: CellVisual::REST,
                tween: None,
                filtered_out: false,
                flag_on_complete: None,
            })
            .collect();
        Self { cells }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Visual of a cell as of the last tick.
    #[must_use]
    pub fn visual(&self, cell: CellId) -> Option<CellVisual> {
        self.cells.get(cell).map(|c| c.visual)
    }

    /// Visual of a cell sampled at `now`, including in-flight tweens.
    #[must_use]
    pub fn visual_at(&self, cell: CellId, now: Instant) -> Option<CellVisual> {
        self.cells.get(cell).map(|c| {
            c.tween.as_ref().map_or(c.visual, |tween| tween.sample(now))
        })
    }

    /// Whether the cell carries the filtered-out flag.
    #[must_use]
    pub fn is_filtered_out(&self, cell: CellId) -> bool {
        self.cells.get(cell).is_some_and(|c| c.filtered_out)
    }

    /// Whether the cell has a tween in flight.
    #[must_use]
    pub fn is_animating(&self, cell: CellId) -> bool {
        self.cells.get(cell).is_some_and(|c| c.tween.is_some())
    }

    /// Whether every cell tween has completed by `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.cells
            .iter()
            .filter_map(|c| c.tween.as_ref())
            .all(|tween| tween.is_complete(now))
    }

    /// Animate a cell from its current visual to `to`.
    ///
    /// Replaces any tween already running on the cell; a pending
    /// filtered-out flag of the replaced tween is dropped.
    pub fn animate(
        &mut self,
        cell: CellId,
        now: Instant,
        to: CellVisual,
        motion: CellMotion,
    ) {
        self.animate_flagged(cell, now, to, motion, None);
    }

    /// Like [`animate`](Self::animate), then set the filtered-out flag to
    /// `filtered_out` once the tween completes.
    pub fn animate_flagged(
        &mut self,
        cell: CellId,
        now: Instant,
        to: CellVisual,
        motion: CellMotion,
        filtered_out: Option<bool>,
    ) {
        let Some(c) = self.cells.get_mut(cell) else {
            return;
        };
        let from = c.tween.as_ref().map_or(c.visual, |tween| tween.sample(now));
        c.visual = from;
        c.tween = Some(
            Tween::new(from, to, now, motion.duration, motion.easing)
                .with_delay(motion.delay),
        );
        c.flag_on_complete = filtered_out;
    }

    /// Set a cell's offset directly. Ignored while the cell is animating.
    pub fn set_offset(&mut self, cell: CellId, offset: Vec2) {
        if let Some(c) = self.cells.get_mut(cell) {
            if c.tween.is_none() {
                c.visual.offset = offset;
            }
        }
    }

    /// Advance every tween to `now`, committing completed ones.
    ///
    /// Returns whether any cell is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for c in &mut self.cells {
            let Some(tween) = &c.tween else {
                continue;
            };
            c.visual = tween.sample(now);
            if tween.is_complete(now) {
                c.tween = None;
                if let Some(flag) = c.flag_on_complete.take() {
                    c.filtered_out = flag;
                }
            } else {
                animating = true;
            }
        }
        animating
    }

    /// Surface-space rectangle of a cell including its offset, without
    /// its scale.
    #[must_use]
    pub fn placed_rect(&self, layout: &GridLayout, cell: CellId) -> Option<Rect> {
        let rect = layout.cell_rect(cell)?;
        let visual = self.visual(cell)?;
        Some(rect.translated(visual.offset))
    }

    /// Surface-space rectangle as drawn at `now`: offset and scaled about
    /// its center, in-flight tweens included.
    #[must_use]
    pub fn drawn_rect(
        &self,
        layout: &GridLayout,
        cell: CellId,
        now: Instant,
    ) -> Option<Rect> {
        let visual = self.visual_at(cell, now)?;
        let rect = layout.cell_rect(cell)?;
        Some(
            rect.translated(visual.offset)
                .scaled_about_center(visual.scale),
        )
    }

    /// Viewport-space rectangle of the placed cell with an untransformed
    /// surface scrolled to `pan_offset`.
    #[must_use]
    pub fn screen_rect(
        &self,
        layout: &GridLayout,
        cell: CellId,
        pan_offset: Vec2,
    ) -> Option<Rect> {
        self.placed_rect(layout, cell)
            .map(|rect| rect.translated(-pan_offset))
    }
}
