use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use techevents_types::Effect;

use super::components::{AuthComponent, Component, NavBarComponent, PageComponent};
use super::layout::MainLayout;
use super::theme::theme_helpers as th;
use crate::app::{App, Route};

/// Root view: routes input to the navigation bar and the current screen, and
/// draws header, body and footer in that stacking order.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    pub page_view: PageComponent,
    pub auth_view: AuthComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            nav_bar_view: NavBarComponent::new(),
            page_view: PageComponent::new(),
            auth_view: AuthComponent::new(),
        }
    }

    fn content_view(&mut self, route: Route) -> &mut dyn Component {
        match route {
            Route::Home => &mut self.page_view,
            Route::Auth => &mut self.auth_view,
        }
    }

    fn status_line(app: &App) -> Line<'static> {
        let theme = &*app.ctx.theme;
        let snapshot = app.nav.state();
        let active = if snapshot.active_section().is_none() { "-" } else { snapshot.active_section().as_str() };
        Line::from(vec![
            Span::styled("active ", theme.text_muted_style()),
            Span::styled(active, theme.accent_emphasis_style()),
            Span::styled(format!("  offset {:.0} ", app.reported_offset()), theme.text_muted_style()),
        ])
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = self.nav_bar_view.handle_key_events(app, key);
        if effects.is_empty() {
            effects.extend(self.content_view(app.route).handle_key_events(app, key));
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.nav_bar_view.handle_mouse_events(app, mouse);
        effects.extend(self.content_view(app.route).handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [header, body, footer] = MainLayout::split(area);
        frame.render_widget(Paragraph::new("").style(th::page_style(&*app.ctx.theme)), area);

        self.content_view(app.route).render(frame, body, app);

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, footer);
        frame.render_widget(Paragraph::new(Self::status_line(app)).alignment(Alignment::Right), footer);

        // Header last so the overlay sits on top of the body.
        self.nav_bar_view.render(frame, header, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans = self.nav_bar_view.get_hint_spans(app);
        match app.route {
            Route::Home => hint_spans.extend(self.page_view.get_hint_spans(app)),
            Route::Auth => hint_spans.extend(self.auth_view.get_hint_spans(app)),
        }
        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" q", " quit ")]));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use techevents_nav::ListenerKind;
    use techevents_types::Href;
    use techevents_util::Settings;

    use super::*;
    use crate::ui::components::nav_bar::LayoutMode;
    use crate::ui::theme::CrimsonTheme;

    fn mounted(width: u16, height: u16) -> (MainView, App) {
        let mut app = App::new(Settings::default(), Box::new(CrimsonTheme::new()));
        app.resize(width, height);
        app.mount();
        (MainView::new(), app)
    }

    fn key(view: &mut MainView, app: &mut App, code: KeyCode) -> Vec<Effect> {
        let effects = view.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE));
        app.process_effects(effects.clone());
        effects
    }

    fn mouse(view: &mut MainView, app: &mut App, kind: MouseEventKind, rect: Rect) -> Vec<Effect> {
        let event = MouseEvent {
            kind,
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        let effects = view.handle_mouse_events(app, event);
        app.process_effects(effects.clone());
        effects
    }

    fn click(view: &mut MainView, app: &mut App, rect: Rect) -> Vec<Effect> {
        mouse(view, app, MouseEventKind::Down(MouseButton::Left), rect)
    }

    #[test]
    fn toggle_press_on_an_open_menu_only_closes_it() {
        let (mut view, mut app) = mounted(60, 30);
        let toggle = app.nav_bar.layout.toggle.unwrap();

        assert!(click(&mut view, &mut app, toggle).is_empty());
        assert!(app.nav.state().menu_open());
        assert!(app.host.listeners().is_listening(ListenerKind::PointerDown));

        assert!(click(&mut view, &mut app, toggle).is_empty());
        assert!(!app.nav.state().menu_open());
        assert!(!app.host.listeners().is_listening(ListenerKind::PointerDown));
    }

    #[test]
    fn overlay_link_click_selects_and_closes() {
        let (mut view, mut app) = mounted(60, 30);
        app.toggle_menu();
        let (href, rect) = app.nav_bar.layout.overlay_links[1];
        assert_eq!(href, Href::Event);

        let effects = click(&mut view, &mut app, rect);
        assert_eq!(effects, vec![Effect::Navigate(Href::Event)]);
        assert!(!app.nav.state().menu_open());
        assert_eq!(app.nav.state().active_section().as_str(), "#event");
        assert_eq!(app.page.metrics().offset(), 20);
    }

    #[test]
    fn overlay_links_are_inert_while_the_menu_is_closed() {
        let (mut view, mut app) = mounted(60, 30);
        let (_, rect) = app.nav_bar.layout.overlay_links[2];
        assert!(click(&mut view, &mut app, rect).is_empty());
        assert_eq!(app.nav.state().active_section().as_str(), "#home");
    }

    #[test]
    fn brand_and_desktop_links_navigate() {
        let (mut view, mut app) = mounted(120, 40);
        let (href, rect) = app.nav_bar.layout.desktop_links[2];
        assert_eq!(click(&mut view, &mut app, rect), vec![Effect::Navigate(href)]);
        assert_eq!(app.nav.state().active_section().as_str(), "#eventform");
        assert!(app.page.metrics().offset() > 0);

        let brand = app.nav_bar.layout.brand;
        assert_eq!(click(&mut view, &mut app, brand), vec![Effect::Navigate(Href::Root)]);
        assert_eq!(app.page.metrics().offset(), 0);
        assert!(app.nav.state().is_link_active(Href::Root));
    }

    #[test]
    fn digit_keys_select_links_in_display_order() {
        let (mut view, mut app) = mounted(120, 40);
        assert_eq!(key(&mut view, &mut app, KeyCode::Char('2')), vec![Effect::Navigate(Href::Event)]);
        assert_eq!(key(&mut view, &mut app, KeyCode::Char('3')), vec![Effect::Navigate(Href::EventForm)]);
        assert_eq!(key(&mut view, &mut app, KeyCode::Char('1')), vec![Effect::Navigate(Href::Root)]);
        assert_eq!(key(&mut view, &mut app, KeyCode::Char('4')), vec![Effect::Navigate(Href::Auth)]);
        assert_eq!(app.route, Route::Auth);
    }

    #[test]
    fn menu_key_only_works_in_the_mobile_layout() {
        let (mut view, mut app) = mounted(120, 40);
        assert_eq!(app.nav_bar.mode(), LayoutMode::Desktop);
        key(&mut view, &mut app, KeyCode::Char('m'));
        assert!(!app.nav.state().menu_open());

        let (mut view, mut app) = mounted(60, 30);
        key(&mut view, &mut app, KeyCode::Char('m'));
        assert!(app.nav.state().menu_open());
        key(&mut view, &mut app, KeyCode::Char('m'));
        assert!(!app.nav.state().menu_open());
    }

    #[test]
    fn escape_closes_the_menu_before_leaving_auth() {
        let (mut view, mut app) = mounted(60, 30);
        key(&mut view, &mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::Auth);

        app.toggle_menu();
        assert!(key(&mut view, &mut app, KeyCode::Esc).is_empty());
        assert!(!app.nav.state().menu_open());
        assert_eq!(app.route, Route::Auth);

        assert_eq!(key(&mut view, &mut app, KeyCode::Esc), vec![Effect::Navigate(Href::Root)]);
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.nav.state().active_section().as_str(), "#home");
    }

    #[test]
    fn unhandled_input_falls_through_to_the_page() {
        let (mut view, mut app) = mounted(120, 40);
        assert!(key(&mut view, &mut app, KeyCode::Char('j')).is_empty());
        assert_eq!(app.page.metrics().offset(), 1);

        let body = Rect::new(10, 10, 1, 1);
        mouse(&mut view, &mut app, MouseEventKind::ScrollDown, body);
        assert_eq!(app.page.metrics().offset(), 4);
    }
}
