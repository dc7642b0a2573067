// Layout - pixel rectangles for each cell of a tiling

use super::Grid;
use crate::errors::{ArrangeError, ArrangeResult};

/// Target rectangle of one window, in desktop pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CellRect {
    /// Position of the window in placement order
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Grid count as a pixel multiplier, clamped at `i32::MAX`.
fn clamp_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Width and height of a single cell. Integer division, so a few pixels
/// on the right and bottom edge may stay uncovered. Grids wider or taller
/// than the screen get zero-sized cells.
pub fn cell_size(grid: &Grid, screen_width: i32, screen_height: i32) -> ArrangeResult<(i32, i32)> {
    if grid.cols == 0 || grid.rows == 0 {
        return Err(ArrangeError::InvalidGrid {
            cols: grid.cols,
            rows: grid.rows,
        });
    }
    Ok((
        screen_width / clamp_i32(grid.cols),
        screen_height / clamp_i32(grid.rows),
    ))
}

/// Rectangles for `count` windows laid out row-major on `grid`.
pub fn compute_layout(
    grid: &Grid,
    screen_width: i32,
    screen_height: i32,
    count: usize,
) -> ArrangeResult<Vec<CellRect>> {
    let (width, height) = cell_size(grid, screen_width, screen_height)?;
    Ok((0..count)
        .map(|index| CellRect {
            index,
            x: clamp_i32(index % grid.cols).saturating_mul(width),
            y: clamp_i32(index / grid.cols).saturating_mul(height),
            width,
            height,
        })
        .collect())
}
