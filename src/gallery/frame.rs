//! Per-frame snapshot of everything the host needs to draw.

use glam::Vec2;
use web_time::Instant;

use super::Gallery;
use crate::focus::{FocusPhase, ViewportTransform};
use crate::scatter::ScatterPhase;
use crate::store::{Caption, CellId};
use crate::surface::CellVisual;
use crate::util::rect::Rect;

/// Pointer cursor the host should show over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Panning is available.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
    /// A mode is active; the surface does not pan.
    Default,
}

/// One cell as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFrame {
    /// The cell (index into the store).
    pub cell: CellId,
    /// Surface-space rectangle including offset and scale, before the
    /// rotation in `visual` is applied about its center.
    pub rect: Rect,
    /// Offset, scale, rotation and opacity.
    pub visual: CellVisual,
    /// Whether the cell is committed as filtered out.
    pub filtered_out: bool,
}

/// Everything drawable at one instant.
///
/// A surface point `p` appears in the viewport at
/// `surface_transform.apply(p) − pan_offset`; the grid is additionally
/// tilted by `grid_tilt` degrees under `perspective`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Full surface size in pixels.
    pub surface_size: Vec2,
    /// Scroll offset of the viewport over the surface.
    pub pan_offset: Vec2,
    /// Focus zoom applied to the whole surface.
    pub surface_transform: ViewportTransform,
    /// Grid rotation `(x, y)` in degrees.
    pub grid_tilt: Vec2,
    /// Perspective distance for the tilt.
    pub perspective: f32,
    /// Every cell in render order.
    pub cells: Vec<CellFrame>,
    /// Filter bar opacity.
    pub filter_bar_opacity: f32,
    /// Caption in the caption slot, if any.
    pub caption: Option<Caption>,
    /// Caption opacity.
    pub caption_opacity: f32,
    /// About panel opacity.
    pub about_opacity: f32,
    /// Whether the "drag to explore" hint is shown.
    pub scroll_hint_visible: bool,
    /// Whether the surface accepts pan gestures.
    pub interactive: bool,
    /// Cursor over the surface.
    pub cursor: Cursor,
    /// Focus view phase.
    pub focus_phase: FocusPhase,
    /// Scatter layout phase.
    pub scatter_phase: ScatterPhase,
}

impl Gallery {
    /// Sample every animation at `now` into a [`Frame`].
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let cells = (0..self.surface.len())
            .filter_map(|cell| {
                let visual = self.surface.visual_at(cell, now)?;
                let rect = self.surface.drawn_rect(&self.layout, cell, now)?;
                Some(CellFrame {
                    cell,
                    rect,
                    visual,
                    filtered_out: self.surface.is_filtered_out(cell),
                })
            })
            .collect();

        let interactive = self.is_interactive();
        let cursor = if self.pan.is_dragging() {
            Cursor::Grabbing
        } else if interactive {
            Cursor::Grab
        } else {
            Cursor::Default
        };

        Frame {
            viewport: self.viewport,
            surface_size: self.layout.surface_size(),
            pan_offset: self.pan.offset(),
            surface_transform: self.focus.transform(now),
            grid_tilt: self.grid_tilt(),
            perspective: self.options.parallax.perspective,
            cells,
            filter_bar_opacity: self.chrome.filter_bar_opacity(now),
            caption: self.chrome.caption().cloned(),
            caption_opacity: self.chrome.caption_opacity(now),
            about_opacity: self.chrome.about_panel_opacity(now),
            scroll_hint_visible: self.pan.scroll_hint_visible(),
            interactive,
            cursor,
            focus_phase: self.focus.phase(),
            scatter_phase: self.scatter.phase(),
        }
    }

    /// Grid tilt in degrees; flat when parallax is off.
    fn grid_tilt(&self) -> Vec2 {
        if self.options.parallax.enabled {
            self.parallax.tilt(&self.options.parallax)
        } else {
            Vec2::ZERO
        }
    }
}
