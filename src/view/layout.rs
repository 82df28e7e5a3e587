//! Screen layout: table, pagination bar and status bar stacked vertically.

use crate::view::constants::{PAGINATION_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Table headers and rows.
    pub table: Rect,
    /// Pagination bar.
    pub pagination: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the screen: table on top, then the pagination bar, then the
/// status bar.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                        // Table
            Constraint::Length(PAGINATION_BAR_HEIGHT), // Pagination bar
            Constraint::Length(STATUS_BAR_HEIGHT),     // Status bar
        ])
        .split(area);

    ScreenAreas {
        table: chunks[0],
        pagination: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_take_one_line_each_at_bottom() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.table, Rect::new(0, 0, 80, 22));
        assert_eq!(areas.pagination, Rect::new(0, 22, 80, 1));
        assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn tiny_screen_gives_table_no_room() {
        let areas = split_screen(Rect::new(0, 0, 80, 2));

        assert_eq!(areas.table.height, 0);
        assert_eq!(areas.pagination.height, 1);
        assert_eq!(areas.status.height, 1);
    }
}
