// Win32 implementation of the desktop operations

use super::{Desktop, EnumControl, WindowHandle};
use crate::grid::CellRect;
use log::warn;
use winapi::shared::minwindef::{BOOL, DWORD, FALSE, FILETIME, LPARAM, TRUE};
use winapi::shared::windef::{HWND, RECT};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetProcessTimes, OpenProcess};
use winapi::um::winnt::{PROCESS_QUERY_INFORMATION, PROCESS_VM_READ};
use winapi::um::winuser::*;

type Visitor<'a> = &'a mut dyn FnMut(WindowHandle) -> EnumControl;

/// The interactive Windows desktop. Stateless; every call goes straight to
/// user32/kernel32.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

fn to_hwnd(window: WindowHandle) -> HWND {
    window.0 as HWND
}

fn filetime_ticks(ft: FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

// lparam carries a `*mut Visitor` owned by the caller of EnumWindows /
// EnumChildWindows for the duration of the call.
unsafe extern "system" fn visit_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let visitor = &mut *(lparam as *mut Visitor<'_>);
    match (*visitor)(WindowHandle(hwnd as u64)) {
        EnumControl::Continue => TRUE,
        EnumControl::Stop => FALSE,
    }
}

impl Desktop for Win32Desktop {
    fn for_each_window(&self, visitor: &mut dyn FnMut(WindowHandle) -> EnumControl) -> bool {
        let mut visitor: Visitor<'_> = visitor;
        unsafe { EnumWindows(Some(visit_window), &mut visitor as *mut Visitor<'_> as LPARAM) != 0 }
    }

    fn for_each_child_window(
        &self,
        parent: WindowHandle,
        visitor: &mut dyn FnMut(WindowHandle) -> EnumControl,
    ) -> bool {
        let mut visitor: Visitor<'_> = visitor;
        unsafe {
            EnumChildWindows(
                to_hwnd(parent),
                Some(visit_window),
                &mut visitor as *mut Visitor<'_> as LPARAM,
            ) != 0
        }
    }

    fn window_title(&self, window: WindowHandle) -> String {
        let hwnd = to_hwnd(window);
        unsafe {
            let length = GetWindowTextLengthW(hwnd);
            if length <= 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    fn class_name(&self, window: WindowHandle) -> String {
        let mut buffer = [0u16; 256];
        let copied =
            unsafe { GetClassNameW(to_hwnd(window), buffer.as_mut_ptr(), buffer.len() as i32) };
        String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
    }

    fn process_creation_time(&self, window: WindowHandle) -> u64 {
        unsafe {
            let mut process_id: DWORD = 0;
            GetWindowThreadProcessId(to_hwnd(window), &mut process_id);

            let process = OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, FALSE, process_id);
            if process.is_null() {
                warn!(
                    "Failed to open process {} of {} (error {})",
                    process_id,
                    window,
                    GetLastError()
                );
                return 0;
            }

            let mut creation_time = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
            let mut exit_time = creation_time;
            let mut kernel_time = creation_time;
            let mut user_time = creation_time;
            let ok = GetProcessTimes(
                process,
                &mut creation_time,
                &mut exit_time,
                &mut kernel_time,
                &mut user_time,
            );
            CloseHandle(process);

            if ok == 0 {
                warn!(
                    "Failed to query process times of {} (error {})",
                    process_id,
                    GetLastError()
                );
                return 0;
            }
            filetime_ticks(creation_time)
        }
    }

    fn window_style(&self, window: WindowHandle) -> isize {
        unsafe { GetWindowLongPtrW(to_hwnd(window), GWL_STYLE) as isize }
    }

    fn set_window_style(&self, window: WindowHandle, style: isize) {
        unsafe {
            SetWindowLongPtrW(to_hwnd(window), GWL_STYLE, style as _);
        }
    }

    fn hide_window(&self, window: WindowHandle) {
        let hwnd = to_hwnd(window);
        unsafe {
            EnableWindow(hwnd, FALSE);
            ShowWindow(hwnd, SW_HIDE);
        }
    }

    fn desktop_resolution(&self) -> (i32, i32) {
        let mut desktop = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        unsafe {
            if GetWindowRect(GetDesktopWindow(), &mut desktop) == 0 {
                warn!("Failed to read the desktop rectangle (error {})", GetLastError());
            }
        }
        // The desktop window starts at (0, 0)
        (desktop.right, desktop.bottom)
    }

    fn move_window(&self, window: WindowHandle, cell: &CellRect) -> bool {
        unsafe {
            SetWindowPos(
                to_hwnd(window),
                std::ptr::null_mut(),
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                SWP_SHOWWINDOW,
            ) != 0
        }
    }

    fn focus_window(&self, window: WindowHandle) {
        unsafe {
            SetForegroundWindow(to_hwnd(window));
        }
    }

    fn focus_desktop(&self) {
        unsafe {
            SetFocus(GetDesktopWindow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filetime_ticks_combines_halves() {
        let ft = FILETIME {
            dwLowDateTime: 0x0000_0002,
            dwHighDateTime: 0x0000_0001,
        };
        assert_eq!(filetime_ticks(ft), 0x1_0000_0002);
    }
}
