// Grid module - tiling solver and the cell geometry derived from it

pub mod layout;
pub mod tiling;

pub use layout::{cell_size, compute_layout, CellRect};
pub use tiling::{grow_to_fit, optimal_tiling};

use std::fmt;

/// Columns and rows of a tiling. Windows fill it in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Number of cells, saturating for degenerate grids.
    pub fn cell_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// True when every one of `count` windows gets its own cell.
    pub fn holds(&self, count: usize) -> bool {
        self.cell_count() >= count
    }

    /// (row, col) of the cell assigned to the `index`-th window.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}
