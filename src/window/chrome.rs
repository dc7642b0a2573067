// Chrome stripping - removes the frame, borders and title bar of a window

use super::{Desktop, EnumControl, WindowHandle};
use log::{debug, info, warn};

// Win32 style bits, spelled out so the mask is usable off Windows
const WS_BORDER: isize = 0x0080_0000;
const WS_DLGFRAME: isize = 0x0040_0000;
const WS_CAPTION: isize = WS_BORDER | WS_DLGFRAME;
const WS_SIZEBOX: isize = 0x0004_0000;
const WS_TILEDWINDOW: isize = 0x00CF_0000;
const FULL_STATE: isize = 0x00C4_0000;

/// Style bits cleared from every arranged window.
pub const CHROME_STYLE_MASK: isize =
    WS_DLGFRAME | WS_SIZEBOX | WS_BORDER | WS_CAPTION | WS_TILEDWINDOW | FULL_STATE;

/// Class of the icon overlay child that Qt based emulators draw on top of
/// the content once the frame is gone.
pub const ICON_OVERLAY_CLASS: &str = "Qt5153QWindowIcon";

pub fn strip_chrome_bits(style: isize) -> isize {
    style & !CHROME_STYLE_MASK
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    /// Not an overlay window
    Ignore,
    /// The first overlay belongs to the real title icon
    Skip,
    Hide,
}

/// Tracks icon overlays seen while walking the children of one top-level
/// window. Create a fresh one per window.
#[derive(Debug, Default)]
pub struct IconOverlayState {
    seen_first: bool,
    hidden: usize,
}

impl IconOverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, class_name: &str) -> OverlayAction {
        if class_name != ICON_OVERLAY_CLASS {
            return OverlayAction::Ignore;
        }
        if !self.seen_first {
            self.seen_first = true;
            return OverlayAction::Skip;
        }
        self.hidden += 1;
        OverlayAction::Hide
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }
}

/// Clears [`CHROME_STYLE_MASK`] from `window` and hides its secondary icon
/// overlays. Overlay handling is best effort: it has only been observed on
/// some Qt builds. Returns the number of overlays hidden.
pub fn strip_chrome<D: Desktop + ?Sized>(desktop: &D, window: WindowHandle) -> usize {
    let style = desktop.window_style(window);
    desktop.set_window_style(window, strip_chrome_bits(style));

    let mut overlays = IconOverlayState::new();
    let completed = desktop.for_each_child_window(window, &mut |child| {
        let class_name = desktop.class_name(child);
        debug!("{} child {} class {}", window, child, class_name);
        match overlays.visit(&class_name) {
            OverlayAction::Skip => info!("Skipping first {}", ICON_OVERLAY_CLASS),
            OverlayAction::Hide => {
                desktop.hide_window(child);
                info!("Hid extra {} on {}", ICON_OVERLAY_CLASS, window);
            }
            OverlayAction::Ignore => {}
        }
        EnumControl::Continue
    });
    if !completed {
        warn!("Failed to walk child windows of {}", window);
    }
    overlays.hidden()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_covers_frame_bits() {
        assert_eq!(CHROME_STYLE_MASK, 0x00CF_0000);
    }

    #[test]
    fn test_strip_keeps_unrelated_bits() {
        // WS_VISIBLE | WS_CLIPCHILDREN | WS_OVERLAPPEDWINDOW
        let style = 0x1000_0000 | 0x0200_0000 | 0x00CF_0000;
        assert_eq!(strip_chrome_bits(style), 0x1200_0000);
    }

    #[test]
    fn test_overlay_state_skips_first_then_hides() {
        let mut state = IconOverlayState::new();
        assert_eq!(state.visit("QWidget"), OverlayAction::Ignore);
        assert_eq!(state.visit(ICON_OVERLAY_CLASS), OverlayAction::Skip);
        assert_eq!(state.visit(ICON_OVERLAY_CLASS), OverlayAction::Hide);
        assert_eq!(state.visit(ICON_OVERLAY_CLASS), OverlayAction::Hide);
        assert_eq!(state.hidden(), 2);
    }

    #[test]
    fn test_overlay_state_is_per_window() {
        let mut first = IconOverlayState::new();
        first.visit(ICON_OVERLAY_CLASS);
        let mut second = IconOverlayState::new();
        assert_eq!(second.visit(ICON_OVERLAY_CLASS), OverlayAction::Skip);
    }

    #[cfg(windows)]
    #[test]
    fn test_mask_matches_winapi_constants() {
        use winapi::um::winuser::{WS_BORDER, WS_CAPTION, WS_DLGFRAME, WS_SIZEBOX, WS_TILEDWINDOW};
        let expected = (WS_DLGFRAME | WS_SIZEBOX | WS_BORDER | WS_CAPTION | WS_TILEDWINDOW | 0xC40000) as isize;
        assert_eq!(CHROME_STYLE_MASK, expected);
    }
}
