// Display module for layout previews
pub mod formatters;

pub use formatters::{format_hwnd_display, preview_cells, print_layout_preview, write_layout_preview};
