use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use techevents_nav::{Chrome, LinkVariant};

use super::roles::{Theme, ThemeRoles};

/// Where a navigation link is drawn. Each placement has its own style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPlacement {
    /// Pill in the header row.
    Desktop,
    /// Full-width row in the mobile overlay.
    Mobile,
}

/// Desktop pill table: filled dark red when active, tinted text otherwise.
pub fn desktop_link_style<T: Theme + ?Sized>(theme: &T, variant: LinkVariant) -> Style {
    let ThemeRoles {
        accent_primary,
        on_accent,
        text_secondary,
        ..
    } = *theme.roles();
    match variant {
        LinkVariant::Active => Style::default().bg(accent_primary).fg(on_accent).add_modifier(Modifier::BOLD),
        LinkVariant::Idle => Style::default().fg(text_secondary),
    }
}

/// Mobile row table: filled red when active, soft overlay text otherwise.
pub fn mobile_link_style<T: Theme + ?Sized>(theme: &T, variant: LinkVariant) -> Style {
    let ThemeRoles {
        accent_secondary,
        on_accent,
        overlay_bg,
        overlay_text,
        ..
    } = *theme.roles();
    match variant {
        LinkVariant::Active => Style::default().bg(accent_secondary).fg(on_accent).add_modifier(Modifier::BOLD),
        LinkVariant::Idle => Style::default().bg(overlay_bg).fg(overlay_text),
    }
}

pub fn link_style<T: Theme + ?Sized>(theme: &T, placement: LinkPlacement, variant: LinkVariant) -> Style {
    match placement {
        LinkPlacement::Desktop => desktop_link_style(theme, variant),
        LinkPlacement::Mobile => mobile_link_style(theme, variant),
    }
}

/// Header container: translucent white while flat, grey with a shadowed bottom edge when elevated.
pub fn header_block<'a, T: Theme + ?Sized>(theme: &T, chrome: Chrome) -> Block<'a> {
    let ThemeRoles {
        surface,
        surface_elevated,
        shadow,
        text,
        ..
    } = *theme.roles();
    match chrome {
        Chrome::Flat => Block::default().style(Style::default().bg(surface).fg(text)),
        Chrome::Elevated => Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(shadow).bg(surface_elevated))
            .style(Style::default().bg(surface_elevated).fg(text)),
    }
}

/// Page surface for sections and the auth screen.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Brand wordmark.
pub fn brand_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.accent_emphasis_style()
}

/// Bordered block used for page cards.
pub fn card<'a, T: Theme + ?Sized>(theme: &T, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false))
        .title(Span::styled(title, theme.accent_emphasis_style()))
        .style(page_style(theme))
}

/// Key/description pairs rendered as hint spans.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::CrimsonTheme;

    #[test]
    fn placements_use_separate_tables_for_the_same_variant() {
        let theme = CrimsonTheme::new();
        let desktop = link_style(&theme, LinkPlacement::Desktop, LinkVariant::Active);
        let mobile = link_style(&theme, LinkPlacement::Mobile, LinkVariant::Active);
        assert_eq!(desktop.bg, Some(theme.roles().accent_primary));
        assert_eq!(mobile.bg, Some(theme.roles().accent_secondary));
        assert_ne!(
            link_style(&theme, LinkPlacement::Desktop, LinkVariant::Idle),
            desktop
        );
    }

    #[test]
    fn hint_spans_alternate_key_and_description() {
        let theme = CrimsonTheme::new();
        let spans = build_hint_spans(&theme, &[(" m", " menu"), (" q", " quit")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, " m");
        assert_eq!(spans[3].content, " quit");
    }
}
