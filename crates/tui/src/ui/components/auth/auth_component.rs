use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

#[derive(Debug, Default)]
pub struct AuthComponent;

impl AuthComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AuthComponent {
    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Esc", " home ")])
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Paragraph::new("").style(th::page_style(theme)), area);

        let card_area = centered_rect(60, 50, area);
        let lines = vec![
            Line::default(),
            Line::from(Span::styled("Sign in to manage your events.", theme.text_primary_style())),
            Line::default(),
            Line::from(Span::styled(
                "Accounts are not available from the terminal yet.",
                theme.text_secondary_style(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Esc", theme.accent_emphasis_style()),
                Span::styled(" or ", theme.text_muted_style()),
                Span::styled("1", theme.accent_emphasis_style()),
                Span::styled(" returns home", theme.text_muted_style()),
            ]),
        ];
        frame.render_widget(Clear, card_area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(th::card(theme, " Login / Signup ")),
            card_area,
        );
    }
}
