//! In-memory desktop used by the integration tests
#![allow(dead_code)]

use arrange_instances::{CellRect, Desktop, EnumControl, WindowHandle};
use std::cell::RefCell;
use std::collections::HashMap;

pub const OVERLAY: &str = "Qt5153QWindowIcon";
pub const FRAMED_STYLE: isize = 0x10CF_0000; // WS_VISIBLE | WS_OVERLAPPEDWINDOW

#[derive(Clone, Debug)]
pub struct FakeWindow {
    pub handle: u64,
    pub title: String,
    pub created: u64,
    pub children: Vec<(u64, String)>,
}

impl FakeWindow {
    pub fn new(handle: u64, title: &str, created: u64) -> Self {
        Self {
            handle,
            title: title.to_string(),
            created,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, classes: &[&str]) -> Self {
        for (i, class) in classes.iter().enumerate() {
            self.children
                .push((self.handle * 100 + i as u64 + 1, class.to_string()));
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusEvent {
    Window(WindowHandle),
    Desktop,
}

pub struct FakeDesktop {
    pub windows: Vec<FakeWindow>,
    pub resolution: (i32, i32),
    pub styles: RefCell<HashMap<WindowHandle, isize>>,
    pub moves: RefCell<Vec<(WindowHandle, CellRect)>>,
    pub hidden: RefCell<Vec<WindowHandle>>,
    pub focus: RefCell<Vec<FocusEvent>>,
}

impl FakeDesktop {
    pub fn new(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows,
            resolution: (1920, 1080),
            styles: RefCell::new(HashMap::new()),
            moves: RefCell::new(Vec::new()),
            hidden: RefCell::new(Vec::new()),
            focus: RefCell::new(Vec::new()),
        }
    }

    pub fn with_resolution(mut self, width: i32, height: i32) -> Self {
        self.resolution = (width, height);
        self
    }

    pub fn moved_handles(&self) -> Vec<u64> {
        self.moves.borrow().iter().map(|(h, _)| h.0).collect()
    }

    fn find(&self, handle: WindowHandle) -> Option<&FakeWindow> {
        self.windows.iter().find(|w| w.handle == handle.0)
    }
}

impl Desktop for FakeDesktop {
    fn for_each_window(&self, visitor: &mut dyn FnMut(WindowHandle) -> EnumControl) -> bool {
        for window in &self.windows {
            if visitor(WindowHandle(window.handle)) == EnumControl::Stop {
                return false;
            }
        }
        true
    }

    fn for_each_child_window(
        &self,
        parent: WindowHandle,
        visitor: &mut dyn FnMut(WindowHandle) -> EnumControl,
    ) -> bool {
        let Some(window) = self.find(parent) else {
            return false;
        };
        for (child, _) in &window.children {
            if visitor(WindowHandle(*child)) == EnumControl::Stop {
                return false;
            }
        }
        true
    }

    fn window_title(&self, window: WindowHandle) -> String {
        self.find(window).map(|w| w.title.clone()).unwrap_or_default()
    }

    fn class_name(&self, window: WindowHandle) -> String {
        self.windows
            .iter()
            .flat_map(|w| w.children.iter())
            .find(|(child, _)| *child == window.0)
            .map(|(_, class)| class.clone())
            .unwrap_or_default()
    }

    fn process_creation_time(&self, window: WindowHandle) -> u64 {
        self.find(window).map(|w| w.created).unwrap_or(0)
    }

    fn window_style(&self, window: WindowHandle) -> isize {
        *self.styles.borrow().get(&window).unwrap_or(&FRAMED_STYLE)
    }

    fn set_window_style(&self, window: WindowHandle, style: isize) {
        self.styles.borrow_mut().insert(window, style);
    }

    fn hide_window(&self, window: WindowHandle) {
        self.hidden.borrow_mut().push(window);
    }

    fn desktop_resolution(&self) -> (i32, i32) {
        self.resolution
    }

    fn move_window(&self, window: WindowHandle, cell: &CellRect) -> bool {
        self.moves.borrow_mut().push((window, *cell));
        true
    }

    fn focus_window(&self, window: WindowHandle) {
        self.focus.borrow_mut().push(FocusEvent::Window(window));
    }

    fn focus_desktop(&self) {
        self.focus.borrow_mut().push(FocusEvent::Desktop);
    }
}
