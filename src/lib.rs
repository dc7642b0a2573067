// Arrange Instances: tiles the windows of several running emulator
// instances into a grid that keeps their native aspect ratio.

// Modular structure
pub mod arrange;
pub mod config;
pub mod display;
pub mod errors;
pub mod grid;
pub mod pattern;
pub mod window;

// Re-export main types for convenience
pub use arrange::{arrange, ArrangeReport};
pub use config::ArrangeConfig;
pub use errors::{usage_text, ArrangeError, ArrangeResult};
pub use grid::{compute_layout, optimal_tiling, CellRect, Grid};
pub use pattern::TitlePattern;
pub use window::{Desktop, EnumControl, Placement, WindowHandle, WindowInfo};
#[cfg(windows)]
pub use window::Win32Desktop;
