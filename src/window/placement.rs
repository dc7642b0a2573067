// Window placement - sizes every window into its grid cell

use super::{Desktop, WindowInfo};
use crate::errors::{ArrangeError, ArrangeResult};
use crate::grid::{compute_layout, optimal_tiling, CellRect, Grid};
use log::{debug, info, warn};

/// Result of placing a set of windows.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    pub grid: Grid,
    pub screen_width: i32,
    pub screen_height: i32,
    pub cells: Vec<CellRect>,
}

/// Tiles `windows` over the desktop in row-major order.
///
/// Without an explicit `tiling` the grid comes from [`optimal_tiling`] on
/// the desktop aspect ratio. An empty window list places nothing and
/// returns `Ok(None)`.
pub fn place_windows<D: Desktop + ?Sized>(
    desktop: &D,
    windows: &[WindowInfo],
    instance_ratio: f64,
    tiling: Option<Grid>,
) -> ArrangeResult<Option<Placement>> {
    if windows.is_empty() {
        info!("No windows to place");
        return Ok(None);
    }

    let (screen_width, screen_height) = desktop.desktop_resolution();
    if screen_width <= 0 || screen_height <= 0 {
        return Err(ArrangeError::InvalidScreen {
            width: screen_width,
            height: screen_height,
        });
    }

    let grid = match tiling {
        Some(grid) => grid,
        None => {
            let screen_ratio = screen_width as f64 / screen_height as f64;
            optimal_tiling(screen_ratio, instance_ratio, windows.len())
        }
    };
    if !grid.holds(windows.len()) {
        warn!(
            "Grid {} has {} cells for {} windows; extra windows go below the screen",
            grid,
            grid.cell_count(),
            windows.len()
        );
    }

    let cells = compute_layout(&grid, screen_width, screen_height, windows.len())?;
    for (window, cell) in windows.iter().zip(&cells) {
        if !desktop.move_window(window.handle, cell) {
            warn!("Failed to move {} \"{}\"", window.handle, window.title);
        }
    }

    let placement = Placement {
        grid,
        screen_width,
        screen_height,
        cells,
    };
    match serde_json::to_string(&placement) {
        Ok(json) => debug!("placement: {}", json),
        Err(e) => warn!("Failed to serialize placement: {}", e),
    }
    info!(
        "Placed {} windows on a {} grid over {}x{}",
        windows.len(),
        grid,
        screen_width,
        screen_height
    );
    Ok(Some(placement))
}

/// Raises each window in order, then hands focus back to the desktop.
pub fn focus_windows<D: Desktop + ?Sized>(desktop: &D, windows: &[WindowInfo]) {
    for window in windows {
        desktop.focus_window(window.handle);
    }
    desktop.focus_desktop();
}
