// Window discovery and ordering

use super::{Desktop, EnumControl, WindowInfo};
use crate::pattern::TitlePattern;
use log::{debug, warn};

/// Top-level windows whose whole title matches `pattern`, in discovery order.
pub fn find_matching_windows<D: Desktop + ?Sized>(
    desktop: &D,
    pattern: &TitlePattern,
) -> Vec<WindowInfo> {
    let mut matching = Vec::new();
    let completed = desktop.for_each_window(&mut |handle| {
        let title = desktop.window_title(handle);
        if pattern.is_match(&title) {
            println!("Window with title \"{}\" matched!", title);
            matching.push(WindowInfo::new(handle, title));
        }
        EnumControl::Continue
    });
    if !completed {
        warn!("Window enumeration stopped early; the match list may be incomplete");
    }

    println!("Found {} matching windows:", matching.len());
    for window in &matching {
        println!("{}\t{}", window.handle, window.title);
    }
    matching
}

/// Orders windows by the creation time of their owning process, oldest
/// first. Ties keep discovery order; a window whose time cannot be read
/// counts as zero and therefore sorts first.
pub fn sort_by_creation<D: Desktop + ?Sized>(desktop: &D, windows: &mut [WindowInfo]) {
    windows.sort_by_cached_key(|window| {
        let created = desktop.process_creation_time(window.handle);
        debug!("{} created at {}", window.handle, created);
        created
    });
}
