//! Borrowed view of the shared gallery state handed to the mode
//! controllers.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::chrome::Chrome;
use crate::layout::GridLayout;
use crate::store::{ArtworkStore, CellId};
use crate::surface::{CellMotion, CellVisual, Surface};

/// Everything a mode controller reads or animates, borrowed from the
/// gallery for the duration of one operation.
#[derive(Debug)]
pub struct Stage<'a> {
    /// Artworks and the active filter.
    pub store: &'a ArtworkStore,
    /// Grid geometry.
    pub layout: &'a GridLayout,
    /// Cell visuals.
    pub surface: &'a mut Surface,
    /// Overlay chrome.
    pub chrome: &'a mut Chrome,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Current scroll offset of the viewport over the surface.
    pub pan_offset: Vec2,
}

impl Stage<'_> {
    /// Center of the viewport in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    /// Animate every cell to the visual the active filter dictates.
    ///
    /// Rotation returns to zero. The offset is kept unless `offset_for`
    /// supplies one. Cell `i` starts after `i × stagger`, and its
    /// filtered-out flag is committed when its own tween completes.
    pub fn restore_to_filter<F>(
        &mut self,
        now: Instant,
        duration: Duration,
        stagger: Duration,
        hidden_scale: f32,
        offset_for: F,
    ) where
        F: Fn(CellId) -> Option<Vec2>,
    {
        for cell in 0..self.surface.len() {
            let visible = self.store.is_visible(cell);
            let Some(current) = self.surface.visual_at(cell, now) else {
                continue;
            };
            let to = CellVisual {
                offset: offset_for(cell).unwrap_or(current.offset),
                rotation: 0.0,
                ..current
            }
            .filtered(visible, hidden_scale);
            let motion = CellMotion::new(duration, stagger * cell as u32);
            self.surface
                .animate_flagged(cell, now, to, motion, Some(!visible));
        }
    }
}
