//! The gallery's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a pointer
//! gesture, a filter button or a programmatic call, is represented as a
//! `GalleryCommand`. Consumers construct commands and pass them to
//! [`Gallery::execute`](super::Gallery::execute).

use glam::Vec2;

use crate::store::{CellId, Filter, Step};

/// A discrete operation on the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryCommand {
    // ── Pan ─────────────────────────────────────────────────────────
    /// Mouse pressed on the background: start panning.
    BeginDrag {
        /// Pointer position in viewport pixels.
        position: Vec2,
    },
    /// Mouse moved while panning.
    DragTo {
        /// Pointer position in viewport pixels.
        position: Vec2,
    },
    /// Mouse released after panning; may start a momentum glide.
    EndDrag,
    /// Finger down on the background: start panning 1:1.
    BeginTouch {
        /// Touch position in viewport pixels.
        position: Vec2,
    },
    /// Finger moved while panning.
    TouchTo {
        /// Touch position in viewport pixels.
        position: Vec2,
    },
    /// Finger lifted.
    EndTouch,
    /// Scroll by a wheel delta.
    Wheel {
        /// Horizontal and vertical delta in pixels.
        delta: Vec2,
        /// Whether shift is held (vertical wheel pans horizontally).
        shift: bool,
    },
    /// Jump back to the initial anchor of the scroll range.
    CenterView,

    // ── Pointer ─────────────────────────────────────────────────────
    /// Pointer moved without panning (drives the parallax).
    Hover {
        /// Pointer position in viewport pixels.
        position: Vec2,
    },
    /// Pointer left the viewport.
    PointerLeft,
    /// A click that did not turn into a drag.
    Click {
        /// Cell under the pointer, or `None` for the background.
        target: Option<CellId>,
    },

    // ── Focus ───────────────────────────────────────────────────────
    /// Zoom into a cell.
    OpenFocus {
        /// The cell to present.
        cell: CellId,
    },
    /// Zoom back out to the grid.
    CloseFocus,
    /// Present the neighbouring visible artwork.
    Navigate {
        /// Direction through the visible artworks.
        step: Step,
    },

    // ── Filter ──────────────────────────────────────────────────────
    /// Show only artworks of one medium, or all.
    SetFilter {
        /// The new filter.
        filter: Filter,
    },

    // ── About ───────────────────────────────────────────────────────
    /// Scatter the grid and show the about panel.
    OpenAbout,
    /// Hide the about panel and restore the grid.
    CloseAbout,

    /// Close whichever mode is open (focus first, then about).
    Dismiss,

    /// The viewport changed size.
    Resize {
        /// New viewport size in pixels.
        size: Vec2,
    },
}
