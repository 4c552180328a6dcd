//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::GRID_COLUMNS;

/// Width of one slot cell, borders included
pub const CELL_WIDTH: u16 = 8;
/// Height of one slot cell, borders included
pub const CELL_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (grid on top, detail line, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Outer rectangle of a grid with `rows` rows, centered in `area` and
    /// clipped to it. Includes a one-cell border for the title.
    #[must_use]
    pub fn grid_rect(area: Rect, rows: usize) -> Rect {
        let width = (GRID_COLUMNS as u16 * CELL_WIDTH + 2).min(area.width);
        let height = (rows as u16 * CELL_HEIGHT + 2).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    /// Rectangle of `slot` inside the inner area of a grid
    #[must_use]
    pub fn cell_rect(inner: Rect, slot: usize) -> Rect {
        let column = (slot % GRID_COLUMNS) as u16;
        let row = (slot / GRID_COLUMNS) as u16;
        let rect = Rect::new(
            inner.x + column * CELL_WIDTH,
            inner.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        rect.intersection(inner)
    }

    /// Slot under the terminal position (`column`, `row`), if any
    #[must_use]
    pub fn slot_at(inner: Rect, size: usize, column: u16, row: u16) -> Option<usize> {
        if column < inner.x || row < inner.y {
            return None;
        }

        let grid_column = usize::from((column - inner.x) / CELL_WIDTH);
        let grid_row = usize::from((row - inner.y) / CELL_HEIGHT);
        if grid_column >= GRID_COLUMNS {
            return None;
        }

        let slot = grid_row * GRID_COLUMNS + grid_column;
        (slot < size).then_some(slot)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
