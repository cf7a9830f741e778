//! Grid geometry: column/row counts and cell rectangles on the surface.
//!
//! Cells are placed row-major in render order. The surface is the grid
//! plus a padding margin on every side, so the viewport can pan past the
//! grid's edges.

use glam::Vec2;

use crate::options::{LayoutMode, LayoutOptions};
use crate::store::CellId;
use crate::util::rect::Rect;

/// Column and row counts of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Number of columns, always at least 1.
    pub columns: usize,
    /// Number of rows, `ceil(count / columns)`.
    pub rows: usize,
}

/// Column and row counts for `count` artworks.
///
/// `count = 0` yields zero rows; callers render an empty grid.
#[must_use]
pub fn compute_layout(count: usize, mode: LayoutMode) -> GridDims {
    let columns = match mode {
        LayoutMode::Adaptive => ((count as f64) * 1.5).sqrt().ceil() as usize,
        LayoutMode::Fixed { columns } => columns as usize,
    }
    .max(1);
    GridDims {
        columns,
        rows: count.div_ceil(columns),
    }
}

/// Placed grid: dimensions plus pixel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    dims: GridDims,
    count: usize,
    cell_size: Vec2,
    gap: f32,
    padding: f32,
}

impl GridLayout {
    /// Lay out `count` cells.
    #[must_use]
    pub fn new(count: usize, options: &LayoutOptions) -> Self {
        let dims = compute_layout(count, options.mode);
        log::debug!(
            "layout: {count} cells in {} columns x {} rows",
            dims.columns,
            dims.rows
        );
        Self {
            dims,
            count,
            cell_size: Vec2::new(options.cell_width, options.cell_height)
                .max(Vec2::ZERO),
            gap: options.gap.max(0.0),
            padding: options.surface_padding.max(0.0),
        }
    }

    /// Column and row counts.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of placed cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Size of the grid without padding.
    #[must_use]
    pub fn grid_size(&self) -> Vec2 {
        let span = |n: usize, cell: f32| {
            if n == 0 {
                0.0
            } else {
                n as f32 * cell + (n - 1) as f32 * self.gap
            }
        };
        Vec2::new(
            span(self.dims.columns.min(self.count), self.cell_size.x),
            span(self.dims.rows, self.cell_size.y),
        )
    }

    /// Size of the whole pannable surface.
    #[must_use]
    pub fn surface_size(&self) -> Vec2 {
        self.grid_size() + Vec2::splat(2.0 * self.padding)
    }

    /// Center of the grid in surface coordinates.
    #[must_use]
    pub fn grid_center(&self) -> Vec2 {
        Vec2::splat(self.padding) + self.grid_size() * 0.5
    }

    /// Surface-space rectangle of a cell, `None` past the last cell.
    #[must_use]
    pub fn cell_rect(&self, cell: CellId) -> Option<Rect> {
        if cell >= self.count {
            return None;
        }
        let column = cell % self.dims.columns;
        let row = cell / self.dims.columns;
        let pitch = self.cell_size + Vec2::splat(self.gap);
        let min = Vec2::splat(self.padding)
            + Vec2::new(column as f32 * pitch.x, row as f32 * pitch.y);
        Some(Rect::new(min, self.cell_size))
    }
}
