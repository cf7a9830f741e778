use glam::Vec2;

use crate::pan::PointerKind;
use crate::store::CellId;

/// Pointer travel beyond which a press is a drag rather than a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// What a release amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Release {
    /// Nothing was pressed, or down and up landed on different things.
    NoAction,
    /// A background press ended; `moved` when it travelled far enough to
    /// count as a drag.
    Background {
        /// Input kind of the press.
        kind: PointerKind,
        /// Whether the pointer travelled past the drag threshold.
        moved: bool,
    },
    /// Press and release on the same cell without dragging.
    Cell(CellId),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    kind: PointerKind,
    start: Vec2,
    target: Option<CellId>,
    moved: bool,
}

/// Tracks the pointer position and the current press.
#[derive(Debug, Clone, Default)]
pub(crate) struct PressTracker {
    pub(crate) pointer: Vec2,
    press: Option<Press>,
}

impl PressTracker {
    /// Record a press at `position` over `target`.
    pub(crate) fn begin(
        &mut self,
        kind: PointerKind,
        position: Vec2,
        target: Option<CellId>,
    ) {
        self.pointer = position;
        self.press = Some(Press {
            kind,
            start: position,
            target,
            moved: false,
        });
    }

    /// Track movement; marks the press as a drag once past the threshold.
    pub(crate) fn moved(&mut self, position: Vec2) {
        self.pointer = position;
        if let Some(press) = &mut self.press {
            if press.start.distance(position) > DRAG_THRESHOLD {
                press.moved = true;
            }
        }
    }

    /// Whether a press of `kind` that started on the background is held.
    pub(crate) fn is_background_press(&self, kind: PointerKind) -> bool {
        self.press
            .is_some_and(|p| p.kind == kind && p.target.is_none())
    }

    /// Drop the press without classifying it.
    pub(crate) fn cancel(&mut self) {
        self.press = None;
    }

    /// Classify the release of the current press. `target` is the cell
    /// under the pointer at release.
    pub(crate) fn release(&mut self, target: Option<CellId>) -> Release {
        let Some(press) = self.press.take() else {
            return Release::NoAction;
        };
        match press.target {
            None => Release::Background {
                kind: press.kind,
                moved: press.moved,
            },
            Some(cell) if !press.moved && target == Some(cell) => {
                Release::Cell(cell)
            }
            Some(_) => Release::NoAction,
        }
    }
}
