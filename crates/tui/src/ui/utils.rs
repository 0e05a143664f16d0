//! Small geometry helpers shared by the UI components.

use ratatui::prelude::*;
use techevents_types::{Bounds, Point};

/// Creates a centered rectangle sized as a percentage of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

pub fn rect_to_bounds(rect: Rect) -> Bounds {
    Bounds::new(rect.x, rect.y, rect.width, rect.height)
}

/// Whether a mouse position falls inside `rect`.
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    rect_to_bounds(rect).contains(point)
}
