// Arrangement flow: find -> order -> strip -> place

use crate::config::ArrangeConfig;
use crate::errors::ArrangeResult;
use crate::window::{
    find_matching_windows, place_windows, sort_by_creation, strip_chrome, Desktop, Placement,
    WindowInfo,
};
use log::info;

/// Outcome of one arrangement run.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrangeReport {
    /// Matched windows in placement order
    pub windows: Vec<WindowInfo>,
    /// `None` when no window matched
    pub placement: Option<Placement>,
    pub overlays_hidden: usize,
}

/// Finds every window matching the configured pattern, orders the windows
/// by process start, removes their chrome and tiles them over the desktop.
/// No match is not an error.
pub fn arrange<D: Desktop + ?Sized>(desktop: &D, config: &ArrangeConfig) -> ArrangeResult<ArrangeReport> {
    info!("Looking for windows matching \"{}\"", config.pattern.as_str());
    let mut windows = find_matching_windows(desktop, &config.pattern);
    sort_by_creation(desktop, &mut windows);

    let overlays_hidden: usize = windows
        .iter()
        .map(|window| strip_chrome(desktop, window.handle))
        .sum();

    let placement = place_windows(desktop, &windows, config.instance_ratio, config.tiling)?;
    Ok(ArrangeReport {
        windows,
        placement,
        overlays_hidden,
    })
}
