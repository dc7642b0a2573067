// Window management module - the OS side of an arrangement.
// Everything here talks to the desktop through the `Desktop` trait so the
// flow can run against the real Win32 desktop or an in-memory one.

pub mod chrome;
pub mod enumerate;
pub mod info;
pub mod placement;
#[cfg(windows)]
pub mod win32;

pub use chrome::{strip_chrome, strip_chrome_bits, IconOverlayState, OverlayAction, CHROME_STYLE_MASK};
pub use enumerate::{find_matching_windows, sort_by_creation};
pub use info::{WindowHandle, WindowInfo};
pub use placement::{focus_windows, place_windows, Placement};
#[cfg(windows)]
pub use win32::Win32Desktop;

use crate::grid::CellRect;

/// Returned by enumeration visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumControl {
    Continue,
    Stop,
}

/// Window system operations used by an arrangement.
///
/// Failures are not reported as errors: implementations log them and fall
/// back to a neutral value (empty string, zero timestamp, `false`).
pub trait Desktop {
    /// Calls `visitor` once per top-level window until it returns
    /// [`EnumControl::Stop`]. Returns false if the walk did not complete.
    fn for_each_window(&self, visitor: &mut dyn FnMut(WindowHandle) -> EnumControl) -> bool;

    /// Calls `visitor` once per descendant of `parent`.
    fn for_each_child_window(
        &self,
        parent: WindowHandle,
        visitor: &mut dyn FnMut(WindowHandle) -> EnumControl,
    ) -> bool;

    fn window_title(&self, window: WindowHandle) -> String;

    fn class_name(&self, window: WindowHandle) -> String;

    /// Creation time of the process owning `window`, in 100ns ticks since
    /// 1601. Zero when it cannot be queried.
    fn process_creation_time(&self, window: WindowHandle) -> u64;

    fn window_style(&self, window: WindowHandle) -> isize;

    fn set_window_style(&self, window: WindowHandle, style: isize);

    /// Disables and hides `window`.
    fn hide_window(&self, window: WindowHandle);

    /// (width, height) of the desktop in pixels.
    fn desktop_resolution(&self) -> (i32, i32);

    /// Moves and resizes `window` into `cell` and shows it.
    fn move_window(&self, window: WindowHandle, cell: &CellRect) -> bool;

    fn focus_window(&self, window: WindowHandle);

    fn focus_desktop(&self);
}
