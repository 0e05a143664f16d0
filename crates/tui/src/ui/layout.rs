//! Screen layout for the terminal host.
//!
//! The screen is a fixed header (the navigation bar), the scrollable body and
//! a one-row hint footer.
use ratatui::prelude::*;

/// Rows taken by the navigation header.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the hint footer.
pub const FOOTER_HEIGHT: u16 = 1;

pub struct MainLayout;

impl MainLayout {
    /// Splits `area` into `[header, body, footer]`.
    pub fn split(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_gets_whatever_header_and_footer_leave() {
        let [header, body, footer] = MainLayout::split(Rect::new(0, 0, 120, 40));
        assert_eq!(header, Rect::new(0, 0, 120, 3));
        assert_eq!(body, Rect::new(0, 3, 120, 36));
        assert_eq!(footer, Rect::new(0, 39, 120, 1));
    }
}
