use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use techevents_types::Effect;

use crate::app::App;
use crate::page::{PageSection, SCROLL_STEP};
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Draws the page sections stacked at the current scroll offset and handles
/// scroll input.
#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    fn section_lines<'a>(theme: &dyn Theme, section: &'a PageSection, width: u16) -> Vec<Line<'a>> {
        let rule_width = usize::from(width).saturating_sub(section.title.chars().count() + 4);
        let mut lines = Vec::with_capacity(usize::from(section.height));
        lines.push(Line::from(vec![
            Span::styled("━━", theme.border_style(false)),
            Span::styled(section.title, theme.accent_emphasis_style()),
            Span::styled("━".repeat(rule_width), theme.border_style(false)),
        ]));
        lines.extend(
            section
                .lines
                .iter()
                .take(usize::from(section.height.saturating_sub(1)))
                .map(|text| Line::from(Span::styled(format!("  {text}"), theme.text_primary_style()))),
        );
        while lines.len() < usize::from(section.height) {
            lines.push(Line::default());
        }
        lines
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_lines(1),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_lines(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_pages(1),
            KeyCode::PageUp => app.scroll_pages(-1),
            KeyCode::Home => app.scroll_to_top(),
            KeyCode::End => app.scroll_to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollDown => app.scroll_lines(SCROLL_STEP),
            MouseEventKind::ScrollUp => app.scroll_lines(-SCROLL_STEP),
            _ => {}
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑↓/PgUp/PgDn", " scroll ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let lines: Vec<Line> = app
            .page
            .sections()
            .iter()
            .flat_map(|section| Self::section_lines(theme, section, area.width))
            .collect();
        let paragraph = Paragraph::new(lines)
            .style(th::page_style(theme))
            .scroll((app.page.metrics().offset(), 0));
        frame.render_widget(paragraph, area);
    }
}
