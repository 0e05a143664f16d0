use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use techevents_nav::ToggleIcon;
use techevents_types::{BRAND_HREF, Effect, NAV_LINKS, Point};

use super::{LayoutMode, NavBarTarget, TAGLINE};
use crate::app::{App, Route};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, LinkPlacement};

/// Renders the header and the overlay, and turns clicks and shortcut keys into
/// navigation triggers.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, frame: &mut Frame, app: &App) {
        let theme = &*app.ctx.theme;
        let snapshot = app.nav.state();
        let layout = &app.nav_bar.layout;

        frame.render_widget(th::header_block(theme, snapshot.chrome()), layout.header);
        frame.render_widget(
            Paragraph::new(Span::styled(super::BRAND_TEXT, th::brand_style(theme))),
            layout.brand,
        );

        for ((href, rect), link) in layout.desktop_links.iter().zip(NAV_LINKS.iter()) {
            let style = th::link_style(theme, LinkPlacement::Desktop, snapshot.link_variant(*href));
            frame.render_widget(Paragraph::new(Span::styled(format!(" {} ", link.label), style)), *rect);
        }

        if let Some(toggle) = layout.toggle {
            let icon = match snapshot.toggle_icon() {
                ToggleIcon::Menu => " ☰ ",
                ToggleIcon::Close => " ✕ ",
            };
            let style = Style::default().bg(theme.roles().border).fg(theme.roles().text);
            frame.render_widget(Paragraph::new(Span::styled(icon, style)), toggle);
        }
    }

    fn render_overlay(&self, frame: &mut Frame, app: &App) {
        let layout = &app.nav_bar.layout;
        let Some(overlay) = layout.overlay else {
            return;
        };
        let theme = &*app.ctx.theme;
        let snapshot = app.nav.state();

        frame.render_widget(Clear, overlay);
        frame.render_widget(Block::default().style(theme.overlay_style()), overlay);

        for ((href, rect), link) in layout.overlay_links.iter().zip(NAV_LINKS.iter()) {
            let style = th::link_style(theme, LinkPlacement::Mobile, snapshot.link_variant(*href));
            let label = format!("  {:<width$}", link.label, width = usize::from(rect.width.saturating_sub(2)));
            frame.render_widget(Paragraph::new(Span::styled(label, style)), *rect);
        }

        if let Some(tagline) = layout.tagline {
            let divider = Rect::new(tagline.x, tagline.y.saturating_sub(1), tagline.width, 1);
            frame.render_widget(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.roles().overlay_divider).bg(theme.roles().overlay_bg)),
                divider,
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(TAGLINE, theme.text_muted_style())))
                    .alignment(Alignment::Center)
                    .style(theme.overlay_style()),
                tagline,
            );
        }
    }
}

impl Component for NavBarComponent {
    /// `m` toggles the mobile menu, `1`-`4` activate links, `Esc` closes the
    /// menu or leaves the auth screen.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('m') if app.nav_bar.mode() == LayoutMode::Mobile => {
                app.toggle_menu();
                Vec::new()
            }
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                app.select_link(NAV_LINKS[index].href)
            }
            KeyCode::Esc if app.nav.state().menu_open() => {
                app.toggle_menu();
                Vec::new()
            }
            KeyCode::Esc if app.route == Route::Auth => app.select_link(BRAND_HREF),
            _ => Vec::new(),
        }
    }

    /// A press on the toggle only toggles. Any other press is first offered to
    /// the outside-click listener, then activates whatever link is underneath.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let point = Point::new(mouse.column, mouse.row);
        let target = app.nav_bar.layout.hit(point, app.nav.state().menu_open());
        if target == Some(NavBarTarget::Toggle) {
            app.toggle_menu();
            return Vec::new();
        }
        app.pointer_down(point);
        match target {
            Some(NavBarTarget::Link(href)) => app.select_link(href),
            Some(NavBarTarget::Brand) => app.select_link(BRAND_HREF),
            Some(NavBarTarget::Toggle) | None => Vec::new(),
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut hints = vec![(" 1-4", " links ")];
        if app.nav_bar.mode() == LayoutMode::Mobile {
            hints.push((" m", " menu "));
        }
        th::build_hint_spans(theme, &hints)
    }

    fn render(&mut self, frame: &mut Frame, _area: Rect, app: &mut App) {
        self.render_header(frame, app);
        if app.nav.state().menu_open() {
            self.render_overlay(frame, app);
        }
    }
}
