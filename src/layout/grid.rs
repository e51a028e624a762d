//! Uniform grid layout and the column/row sizing shared with masonry

use crate::collage::canvas::CanvasSpec;
use crate::io::configuration::GRID_PADDING;
use crate::layout::placement::{Placement, Rect};

/// Column and row counts for a given number of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
}

impl GridDimensions {
    /// Smallest near-square grid holding `count` items
    ///
    /// `columns = ceil(sqrt(count))`, `rows = ceil(count / columns)`, so no row is
    /// ever entirely empty. Returns `None` for zero items.
    pub fn for_count(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let root = count.isqrt();
        let columns = if root * root == count { root } else { root + 1 };
        let rows = count.div_ceil(columns);

        Some(Self { columns, rows })
    }

    /// Total number of cells
    pub const fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Column and row of the item at `index`, filled row by row
    pub const fn cell_position(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Unpadded cell rectangle for the item at `index`
    pub fn cell_rect(&self, canvas: &CanvasSpec, index: usize) -> Rect {
        let cell_width = canvas.width_f64() / self.columns as f64;
        let cell_height = canvas.height_f64() / self.rows as f64;
        let (col, row) = self.cell_position(index);

        Rect::new(
            col as f64 * cell_width,
            row as f64 * cell_height,
            cell_width,
            cell_height,
        )
    }
}

/// Padded grid placements for `count` items
///
/// Each item fills its cell minus a scaled padding on every side. The padding
/// never exceeds a quarter of the shorter cell side, so targets stay positive
/// on very flat or very tall canvases.
pub fn grid_layout(count: usize, canvas: &CanvasSpec) -> Vec<Placement> {
    let Some(dims) = GridDimensions::for_count(count) else {
        return Vec::new();
    };
    let cell = dims.cell_rect(canvas, 0);
    let padding = (GRID_PADDING * canvas.scale()).min(cell.width.min(cell.height) / 4.0);

    (0..count)
        .map(|index| Placement::plain(index, dims.cell_rect(canvas, index).inset(padding)))
        .collect()
}
