//! Application state for the terminal host.
//!
//! [`App`] owns the page, the terminal environment and the mounted navigation
//! component, and acts as the routing collaborator for the navigation requests
//! the component emits. Everything here is headless: the runtime feeds it
//! terminal input and draws it, and tests drive it directly.

use ratatui::layout::Rect;
use techevents_nav::{NavigationComponent, NavigationViewState, Renderer, ScrollClassifier, SectionObserver};
use techevents_types::{Bounds, Effect, Href, Point};
use techevents_util::Settings;
use tracing::{debug, info};

use crate::host::TerminalHost;
use crate::page::PageState;
use crate::ui::components::nav_bar::{LayoutMode, NavBarLayout, NavBarState};
use crate::ui::layout::MainLayout;
use crate::ui::theme::Theme;
use crate::ui::utils::rect_to_bounds;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The scrollable events page (`/`).
    #[default]
    Home,
    /// The login/signup placeholder (`/auth`).
    Auth,
}

/// Renderer that keeps the latest committed snapshot and flags a redraw.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    snapshot: NavigationViewState,
    commits: usize,
    dirty: bool,
}

impl FrameRenderer {
    pub fn snapshot(&self) -> NavigationViewState {
        self.snapshot
    }

    /// Number of snapshots committed since construction.
    pub fn commits(&self) -> usize {
        self.commits
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Renderer for FrameRenderer {
    fn render(&mut self, snapshot: &NavigationViewState) {
        self.snapshot = *snapshot;
        self.commits += 1;
        self.dirty = true;
    }
}

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub settings: Settings,
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub page: PageState,
    pub host: TerminalHost,
    pub nav: NavigationComponent<FrameRenderer>,
    pub nav_bar: NavBarState,
    pub route: Route,
    area: Rect,
    dirty: bool,
}

impl App {
    pub fn new(settings: Settings, theme: Box<dyn Theme>) -> Self {
        let page = PageState::new();
        let host = TerminalHost::for_page(&page);
        let nav = NavigationComponent::new(
            ScrollClassifier::new(settings.scroll_threshold),
            SectionObserver::new(settings.observer_options(), settings.tie_break),
            FrameRenderer::default(),
        );
        Self {
            ctx: SharedCtx { theme, settings },
            page,
            host,
            nav,
            nav_bar: NavBarState::default(),
            route: Route::default(),
            area: Rect::default(),
            dirty: true,
        }
    }

    /// Mounts the navigation and delivers the initial page signals.
    pub fn mount(&mut self) {
        self.nav.mount(&mut self.host);
        self.pump_page_signals();
    }

    pub fn unmount(&mut self) {
        self.nav.unmount(&mut self.host);
    }

    /// Re-lays out for a new terminal size and re-measures the page.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let [_, body, _] = MainLayout::split(self.area);
        self.page.set_viewport_height(body.height);

        let mode = LayoutMode::for_width(width, self.ctx.settings.mobile_breakpoint);
        self.nav_bar.layout = NavBarLayout::compute(self.area, mode);
        // The desktop layout has no overlay on screen, so every press is outside it.
        let overlay = self.nav_bar.layout.overlay.map_or_else(Bounds::default, rect_to_bounds);
        self.nav.set_overlay_bounds(Some(overlay));
        debug!(width, height, ?mode, "terminal resized");

        self.pump_page_signals();
        self.dirty = true;
    }

    /// Scroll offset the navigation sees, in page units. The auth screen does not scroll.
    pub fn reported_offset(&self) -> f64 {
        match self.route {
            Route::Home => self.page.offset_units(),
            Route::Auth => 0.0,
        }
    }

    pub fn scroll_lines(&mut self, delta: i16) {
        self.scroll_with(|page| page.scroll_lines(delta));
    }

    pub fn scroll_pages(&mut self, delta: i16) {
        self.scroll_with(|page| page.scroll_pages(delta));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_with(PageState::scroll_to_top);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_with(PageState::scroll_to_bottom);
    }

    fn scroll_with(&mut self, scroll: impl FnOnce(&mut PageState) -> bool) {
        if self.route != Route::Home {
            return;
        }
        if scroll(&mut self.page) {
            self.pump_page_signals();
            self.dirty = true;
        }
    }

    /// Delivers whatever scroll and intersection signals the current geometry produces.
    pub fn pump_page_signals(&mut self) {
        if let Some(event) = self.host.scroll_signal(self.reported_offset()) {
            self.nav.handle_platform_event(&mut self.host, event);
        }
        if self.route != Route::Home {
            return;
        }
        for event in self.host.intersection_signals(&self.page) {
            self.nav.handle_platform_event(&mut self.host, event);
        }
    }

    /// Hamburger / close button.
    pub fn toggle_menu(&mut self) {
        self.nav.toggle(&mut self.host);
    }

    /// Offers a mouse press to the outside-click listener, if one is attached.
    pub fn pointer_down(&mut self, point: Point) {
        if let Some(event) = self.host.pointer_signal(point) {
            self.nav.handle_platform_event(&mut self.host, event);
        }
    }

    pub fn select_link(&mut self, href: Href) -> Vec<Effect> {
        self.nav.select_link(&mut self.host, href)
    }

    pub fn process_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(href) => self.navigate(href),
            }
        }
    }

    /// Routes a navigation request: fragments scroll to their section, `/`
    /// scrolls to the top and `/auth` swaps in the auth screen.
    pub fn navigate(&mut self, href: Href) {
        match href {
            Href::Auth => self.route = Route::Auth,
            Href::Root => {
                self.enter_page();
                self.page.scroll_to_top();
            }
            fragment => {
                self.enter_page();
                if let Some(section) = fragment.section() {
                    self.page.scroll_to_section(section);
                }
            }
        }
        info!(href = %href, route = ?self.route, "navigated");
        self.pump_page_signals();
        self.dirty = true;
    }

    fn enter_page(&mut self) {
        if self.route != Route::Home {
            self.route = Route::Home;
            self.host.reset_observations();
        }
    }

    /// Whether anything changed since the last draw. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        let committed = self.nav.renderer_mut().take_dirty();
        std::mem::take(&mut self.dirty) || committed
    }
}
