// Terminal preview of a placement

use crate::grid::Grid;
use crate::window::{WindowHandle, WindowInfo};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Format a window handle for display (last byte in hex)
pub fn format_hwnd_display(handle: WindowHandle) -> String {
    format!("{:02X}", handle.0 & 0xFF)
}

/// Handle shown in each cell, row by row.
pub fn preview_cells(grid: &Grid, windows: &[WindowInfo]) -> Vec<Vec<Option<WindowHandle>>> {
    let mut rows = vec![vec![None; grid.cols]; grid.rows];
    for (index, window) in windows.iter().enumerate() {
        let (row, col) = grid.position_of(index);
        if row < grid.rows {
            rows[row][col] = Some(window.handle);
        }
    }
    rows
}

fn cell_color(handle: WindowHandle) -> Color {
    match handle.0 % 6 {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Blue,
        3 => Color::Yellow,
        4 => Color::Magenta,
        _ => Color::White,
    }
}

pub fn write_layout_preview<W: Write>(out: &mut W, grid: &Grid, windows: &[WindowInfo]) -> io::Result<()> {
    queue!(out, SetForegroundColor(Color::Cyan))?;
    queue!(
        out,
        Print(format!("Layout {} ({} windows)\n", grid, windows.len()))
    )?;
    queue!(out, ResetColor)?;

    queue!(out, Print("    "))?;
    for col in 0..grid.cols {
        queue!(out, Print(format!(" {:2}", col)))?;
    }
    queue!(out, Print("\n"))?;

    for (row, cells) in preview_cells(grid, windows).iter().enumerate() {
        queue!(out, Print(format!("{:2}: ", row)))?;
        for cell in cells {
            match cell {
                Some(handle) => {
                    queue!(out, SetBackgroundColor(cell_color(*handle)))?;
                    queue!(out, SetForegroundColor(Color::Black))?;
                    queue!(out, Print(format_hwnd_display(*handle)))?;
                    queue!(out, ResetColor)?;
                    queue!(out, Print(" "))?;
                }
                None => queue!(out, Print(".. "))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

pub fn print_layout_preview(grid: &Grid, windows: &[WindowInfo]) -> io::Result<()> {
    let mut stdout = io::stdout();
    write_layout_preview(&mut stdout, grid, windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(count: u64) -> Vec<WindowInfo> {
        (1..=count)
            .map(|i| WindowInfo::new(WindowHandle(0x100 + i), format!("Instance {}", i)))
            .collect()
    }

    #[test]
    fn test_hwnd_display_keeps_last_byte() {
        assert_eq!(format_hwnd_display(WindowHandle(0x12AB)), "AB");
        assert_eq!(format_hwnd_display(WindowHandle(0x7)), "07");
    }

    #[test]
    fn test_preview_cells_fill_rows_first() {
        let cells = preview_cells(&Grid::new(3, 2), &windows(4));
        assert_eq!(cells[0], vec![Some(WindowHandle(0x101)), Some(WindowHandle(0x102)), Some(WindowHandle(0x103))]);
        assert_eq!(cells[1], vec![Some(WindowHandle(0x104)), None, None]);
    }

    #[test]
    fn test_preview_ignores_windows_outside_grid() {
        let cells = preview_cells(&Grid::new(1, 1), &windows(3));
        assert_eq!(cells, vec![vec![Some(WindowHandle(0x101))]]);
    }

    #[test]
    fn test_written_preview_lists_every_row() {
        let mut out = Vec::new();
        write_layout_preview(&mut out, &Grid::new(2, 2), &windows(3)).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Layout 2x2 (3 windows)"));
        assert!(text.contains(" 0: "));
        assert!(text.contains(" 1: "));
        assert!(text.contains("03"));
        assert!(text.contains(".. "));
    }
}
