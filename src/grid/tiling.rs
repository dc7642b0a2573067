// Tiling solver - picks the column/row count that best fills the screen
// with windows of a fixed aspect ratio.

use super::Grid;
use log::debug;

/// Smallest grid able to hold `instance_count` windows whose shape is
/// closest to the screen once every cell keeps `instance_ratio`.
///
/// Solving `rows * cols = n` together with `(cols / rows) * instance_ratio
/// = screen_ratio` gives fractional `rows = sqrt(n / (screen / instance))`
/// and `cols = n / rows`. Both are truncated and then grown by
/// [`grow_to_fit`]. Inputs must be positive; degenerate ratios produce
/// degenerate (1xN or Nx1 style) grids rather than errors.
pub fn optimal_tiling(screen_ratio: f64, instance_ratio: f64, instance_count: usize) -> Grid {
    let target_ratio = screen_ratio / instance_ratio;
    let count = instance_count as f64;
    let ideal_rows = (count / target_ratio).sqrt();
    let ideal_cols = count / ideal_rows;
    debug!("ideal rows {:.4} cols {:.4}", ideal_rows, ideal_cols);

    let grid = grow_to_fit(ideal_rows, ideal_cols, instance_count);
    debug!("tiling {} instances as {}", instance_count, grid);
    grid
}

/// Rounds fractional rows/columns up to a whole grid.
///
/// The dimension with the strictly larger remainder grows first; a tie
/// grows the columns. If the product still falls short of
/// `instance_count`, the other dimension grows by one as well. Exact
/// inputs are returned unchanged.
pub fn grow_to_fit(ideal_rows: f64, ideal_cols: f64, instance_count: usize) -> Grid {
    // `as` truncates toward zero (and saturates on overflow)
    let mut rows = ideal_rows as usize;
    let mut cols = ideal_cols as usize;
    let row_rem = ideal_rows - rows as f64;
    let col_rem = ideal_cols - cols as f64;
    debug!("row remainder {:.4} col remainder {:.4}", row_rem, col_rem);

    // TODO: snap remainders within a few ulps of zero; an exact grid can
    // currently pick up an extra row or column from rounding noise.
    if row_rem > 0.0 || col_rem > 0.0 {
        if row_rem > col_rem {
            rows = rows.saturating_add(1);
            if rows.saturating_mul(cols) < instance_count {
                cols = cols.saturating_add(1);
            }
        } else {
            cols = cols.saturating_add(1);
            if rows.saturating_mul(cols) < instance_count {
                rows = rows.saturating_add(1);
            }
        }
    }

    Grid::new(cols, rows)
}
