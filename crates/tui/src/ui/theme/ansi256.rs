//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates the crimson palette with indexed colors.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(255),
                surface: Color::Indexed(231),
                surface_elevated: Color::Indexed(254),
                border: Color::Indexed(252),
                shadow: Color::Indexed(247),

                text: Color::Indexed(234),
                text_secondary: Color::Indexed(238),
                text_muted: Color::Indexed(244),

                accent_primary: Color::Indexed(88),
                accent_secondary: Color::Indexed(124),
                accent_subtle: Color::Indexed(224),
                on_accent: Color::Indexed(231),

                overlay_bg: Color::Indexed(233),
                overlay_text: Color::Indexed(252),
                overlay_divider: Color::Indexed(236),

                focus: Color::Indexed(203),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
