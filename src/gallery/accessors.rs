//! Read-only query methods for [`Gallery`].

use glam::Vec2;
use web_time::Instant;

use super::Gallery;
use crate::focus::FocusPhase;
use crate::layout::GridLayout;
use crate::options::Options;
use crate::scatter::ScatterPhase;
use crate::store::{ArtworkStore, CellId, Filter};
use crate::surface::Surface;

// ── Data ──

impl Gallery {
    /// The artwork store and its active filter.
    #[must_use]
    pub fn store(&self) -> &ArtworkStore {
        &self.store
    }

    /// What the filter control offers: `All`, then every medium in
    /// first-appearance order.
    #[must_use]
    pub fn filter_options(&self) -> Vec<Filter> {
        self.store.filter_options()
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &Filter {
        self.store.filter()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Geometry ──

impl Gallery {
    /// Grid geometry.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Cell visuals as of the last tick.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Scroll offset of the viewport over the surface.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan.offset()
    }

    /// The visible cell drawn under a viewport position, through the focus
    /// zoom. Later cells win where drawn rectangles overlap.
    #[must_use]
    pub fn hit_test(&self, position: Vec2, now: Instant) -> Option<CellId> {
        let transform = self.focus.transform(now);
        let point = transform.invert(position + self.pan.offset())?;
        (0..self.surface.len()).rev().find(|&cell| {
            self.store.is_visible(cell)
                && self
                    .surface
                    .drawn_rect(&self.layout, cell, now)
                    .is_some_and(|rect| rect.contains(point))
        })
    }
}

// ── Modes ──

impl Gallery {
    /// Focus view phase.
    #[must_use]
    pub fn focus_phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    /// The cell presented by the focus view.
    #[must_use]
    pub fn focused_cell(&self) -> Option<CellId> {
        self.focus.session().map(|session| session.cell)
    }

    /// Scatter layout phase.
    #[must_use]
    pub fn scatter_phase(&self) -> ScatterPhase {
        self.scatter.phase()
    }

    /// Whether the surface currently accepts pan gestures.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan.is_enabled()
    }
}
