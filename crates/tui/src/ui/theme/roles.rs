use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    /// Header background once the page has scrolled.
    pub surface_elevated: Color,
    pub border: Color,
    /// Drop-shadow line drawn under the elevated header.
    pub shadow: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Filled background of the active desktop link.
    pub accent_primary: Color,
    /// Filled background of the active mobile link.
    pub accent_secondary: Color,
    /// Hover-tinted background of idle desktop links.
    pub accent_subtle: Color,
    pub on_accent: Color,

    /// Background of the slide-in mobile overlay.
    pub overlay_bg: Color,
    pub overlay_text: Color,
    pub overlay_divider: Color,

    pub focus: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }

    fn overlay_style(&self) -> Style {
        Style::default().bg(self.roles().overlay_bg).fg(self.roles().overlay_text)
    }
}
