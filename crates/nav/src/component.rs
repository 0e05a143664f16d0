//! The mounted navigation component.
//!
//! [`NavigationComponent`] owns the single [`NavigationViewState`] and the
//! listener handles that feed it. Its lifecycle is:
//!
//! 1. `mount` registers the scroll listener and an intersection observation
//!    for every watched section the page actually has, then renders once.
//! 2. Platform events and user triggers produce new snapshots; a snapshot that
//!    differs from the current one is committed and rendered exactly once.
//! 3. The pointer-down listener exists only while the menu is open.
//! 4. `unmount` releases every registration and discards the state.

use serde::Deserialize;
use techevents_types::{Bounds, Effect, Href, IntersectionEntry, Point, SectionId};
use tracing::{debug, info, trace};

use crate::{Environment, NavigationViewState, Renderer, ScrollClassifier, SectionObserver, Subscription};

/// A signal delivered by the host through one of the component's listeners.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformEvent {
    /// Current vertical scroll offset.
    Scroll(f64),
    /// Pointer pressed at a location on the host surface.
    PointerDown(Point),
    /// One batch of intersection records.
    Intersections(Vec<IntersectionEntry>),
}

/// Navigation bar state machine bound to a host environment.
#[derive(Debug)]
pub struct NavigationComponent<R: Renderer> {
    classifier: ScrollClassifier,
    observer: SectionObserver,
    renderer: R,
    state: NavigationViewState,
    overlay: Option<Bounds>,
    scroll_listener: Option<Subscription>,
    pointer_listener: Option<Subscription>,
    observation: Option<Subscription>,
    observed: Vec<SectionId>,
    mounted: bool,
}

impl<R: Renderer> NavigationComponent<R> {
    pub fn new(classifier: ScrollClassifier, observer: SectionObserver, renderer: R) -> Self {
        Self {
            classifier,
            observer,
            renderer,
            state: NavigationViewState::default(),
            overlay: None,
            scroll_listener: None,
            pointer_listener: None,
            observation: None,
            observed: Vec::new(),
            mounted: false,
        }
    }

    pub fn state(&self) -> NavigationViewState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Sections with a live intersection observation.
    pub fn observed_sections(&self) -> &[SectionId] {
        &self.observed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Records where the mobile overlay is drawn; `None` while it is not laid out.
    pub fn set_overlay_bounds(&mut self, bounds: Option<Bounds>) {
        self.overlay = bounds;
    }

    pub fn overlay_bounds(&self) -> Option<Bounds> {
        self.overlay
    }

    /// Attaches listeners and renders the initial snapshot. Mounting twice is a no-op.
    pub fn mount(&mut self, env: &mut impl Environment) {
        if self.mounted {
            return;
        }
        self.state = NavigationViewState::default();
        self.scroll_listener = Some(env.subscribe_scroll());

        let (present, missing): (Vec<SectionId>, Vec<SectionId>) =
            self.observer.watched().iter().copied().partition(|section| env.has_region(*section));
        for section in &missing {
            debug!(section = %section, "section not on page; skipping observation");
        }
        if !present.is_empty() {
            self.observation = Some(env.observe_regions(&present, self.observer.options()));
        }
        debug!(observed = present.len(), "navigation mounted");
        self.observed = present;
        self.mounted = true;
        self.renderer.render(&self.state);
    }

    /// Releases every listener and discards the state.
    pub fn unmount(&mut self, env: &mut impl Environment) {
        if !self.mounted {
            return;
        }
        for subscription in [
            self.scroll_listener.take(),
            self.pointer_listener.take(),
            self.observation.take(),
        ]
        .into_iter()
        .flatten()
        {
            env.unsubscribe(subscription);
        }
        self.observed.clear();
        self.overlay = None;
        self.state = NavigationViewState::default();
        self.mounted = false;
        debug!("navigation unmounted");
    }

    /// Dispatches a platform event to the matching sub-behavior.
    ///
    /// Events for signals the component is not currently listening to are dropped.
    pub fn handle_platform_event(&mut self, env: &mut impl Environment, event: PlatformEvent) {
        match event {
            PlatformEvent::Scroll(offset) => self.on_scroll(env, offset),
            PlatformEvent::PointerDown(point) => self.dismiss_if_outside(env, point),
            PlatformEvent::Intersections(batch) => self.on_intersections(env, &batch),
        }
    }

    pub fn on_scroll(&mut self, env: &mut impl Environment, offset: f64) {
        if self.scroll_listener.is_none() {
            return;
        }
        let next = self.state.with_scroll_offset(offset, &self.classifier);
        self.commit(env, next);
    }

    pub fn on_intersections(&mut self, env: &mut impl Environment, batch: &[IntersectionEntry]) {
        if self.observation.is_none() {
            return;
        }
        let relevant: Vec<IntersectionEntry> =
            batch.iter().filter(|entry| self.observed.contains(&entry.section)).copied().collect();
        let next = self.state.with_intersections(&relevant, &self.observer);
        self.commit(env, next);
    }

    /// Hamburger / close button.
    pub fn toggle(&mut self, env: &mut impl Environment) {
        if !self.mounted {
            return;
        }
        let next = self.state.toggled();
        self.commit(env, next);
    }

    /// Activates a link (desktop, mobile or brand) and requests navigation to it.
    pub fn select_link(&mut self, env: &mut impl Environment, target: Href) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        let next = self.state.with_link_selected(target);
        self.commit(env, next);
        info!(href = %target, "navigation requested");
        vec![Effect::Navigate(target)]
    }

    /// Closes the open menu when `click` lands outside the overlay.
    pub fn dismiss_if_outside(&mut self, env: &mut impl Environment, click: Point) {
        if self.pointer_listener.is_none() {
            return;
        }
        let next = self.state.dismissed_if_outside(click, self.overlay);
        self.commit(env, next);
    }

    fn commit(&mut self, env: &mut impl Environment, next: NavigationViewState) {
        if next != self.state {
            self.state = next;
            trace!(
                scrolled = next.scrolled(),
                active = %next.active_section(),
                menu_open = next.menu_open(),
                "navigation state committed"
            );
            self.renderer.render(&self.state);
        }
        self.sync_pointer_listener(env);
    }

    /// Keeps the outside-click listener attached exactly while the menu is open.
    fn sync_pointer_listener(&mut self, env: &mut impl Environment) {
        match (self.state.menu_open(), self.pointer_listener) {
            (true, None) => {
                self.pointer_listener = Some(env.subscribe_pointer_down());
                debug!("outside-click listener attached");
            }
            (false, Some(subscription)) => {
                env.unsubscribe(subscription);
                self.pointer_listener = None;
                debug!("outside-click listener detached");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use techevents_types::{ObserverOptions, TieBreak};

    use super::*;
    use crate::{ListenerKind, MemoryEnvironment};

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        frames: Vec<NavigationViewState>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, snapshot: &NavigationViewState) {
            self.frames.push(*snapshot);
        }
    }

    fn component() -> NavigationComponent<RecordingRenderer> {
        NavigationComponent::new(
            ScrollClassifier::default(),
            SectionObserver::new(ObserverOptions::default(), TieBreak::Lexicographic),
            RecordingRenderer::default(),
        )
    }

    #[test]
    fn mount_observes_present_sections_and_renders_once() {
        let mut env = MemoryEnvironment::new([SectionId::Home, SectionId::EventForm]);
        let mut nav = component();
        nav.mount(&mut env);

        assert_eq!(nav.observed_sections(), &[SectionId::Home, SectionId::EventForm]);
        assert!(env.listeners().is_listening(ListenerKind::Scroll));
        assert!(env.listeners().is_listening(ListenerKind::Intersection));
        assert!(!env.listeners().is_listening(ListenerKind::PointerDown));
        assert_eq!(nav.renderer().frames, vec![NavigationViewState::default()]);
    }

    #[test]
    fn page_without_sections_gets_no_observer() {
        let mut env = MemoryEnvironment::new([]);
        let mut nav = component();
        nav.mount(&mut env);
        assert!(!env.listeners().is_listening(ListenerKind::Intersection));
        assert_eq!(env.listeners().len(), 1);

        nav.on_intersections(&mut env, &[IntersectionEntry::new(SectionId::Home, true, 1.0)]);
        assert!(nav.state().active_section().is_none());
    }

    #[test]
    fn end_to_end_scroll_observe_and_select() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);

        nav.handle_platform_event(&mut env, PlatformEvent::Scroll(120.0));
        assert!(nav.state().scrolled());

        nav.handle_platform_event(
            &mut env,
            PlatformEvent::Intersections(vec![IntersectionEntry::new(SectionId::EventForm, true, 1.0)]),
        );
        assert_eq!(nav.state().active_section().as_str(), "#eventform");

        let effects = nav.select_link(&mut env, Href::Root);
        assert_eq!(effects, vec![Effect::Navigate(Href::Root)]);
        assert_eq!(nav.state().active_section().as_str(), "#home");
        assert!(!nav.state().menu_open());
    }

    #[test]
    fn renders_only_when_the_snapshot_changes() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);

        nav.on_scroll(&mut env, 10.0);
        nav.on_scroll(&mut env, 30.0);
        assert_eq!(nav.renderer().frames.len(), 1);

        nav.on_scroll(&mut env, 60.0);
        nav.on_scroll(&mut env, 90.0);
        assert_eq!(nav.renderer().frames.len(), 2);

        nav.on_intersections(&mut env, &[IntersectionEntry::new(SectionId::Home, false, 0.1)]);
        assert_eq!(nav.renderer().frames.len(), 2);
    }

    #[test]
    fn outside_click_listener_follows_the_menu() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);
        nav.set_overlay_bounds(Some(Bounds::new(0, 3, 30, 20)));

        nav.toggle(&mut env);
        assert!(env.listeners().is_listening(ListenerKind::PointerDown));

        nav.handle_platform_event(&mut env, PlatformEvent::PointerDown(Point::new(10, 10)));
        assert!(nav.state().menu_open());

        nav.handle_platform_event(&mut env, PlatformEvent::PointerDown(Point::new(60, 10)));
        assert!(!nav.state().menu_open());
        assert!(!env.listeners().is_listening(ListenerKind::PointerDown));
    }

    #[test]
    fn pointer_down_is_ignored_while_closed() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);
        nav.set_overlay_bounds(Some(Bounds::new(0, 3, 30, 20)));

        let before = nav.state();
        nav.dismiss_if_outside(&mut env, Point::new(60, 10));
        assert_eq!(nav.state(), before);
        assert_eq!(nav.renderer().frames.len(), 1);
    }

    #[test]
    fn link_selection_detaches_outside_click_listener() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);
        nav.toggle(&mut env);
        nav.select_link(&mut env, Href::Auth);

        assert!(!nav.state().menu_open());
        assert_eq!(nav.state().active_section().as_str(), "/auth");
        assert!(!env.listeners().is_listening(ListenerKind::PointerDown));
    }

    #[test]
    fn unmount_leaves_no_listeners() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);
        nav.toggle(&mut env);
        assert_eq!(env.listeners().len(), 3);

        nav.unmount(&mut env);
        assert!(env.listeners().is_empty());
        assert!(!nav.is_mounted());
        assert_eq!(nav.state(), NavigationViewState::default());

        nav.on_scroll(&mut env, 500.0);
        nav.toggle(&mut env);
        assert!(nav.select_link(&mut env, Href::Event).is_empty());
        assert_eq!(nav.state(), NavigationViewState::default());
        assert!(env.listeners().is_empty());
    }

    #[test]
    fn remount_starts_from_a_clean_state() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut nav = component();
        nav.mount(&mut env);
        nav.on_scroll(&mut env, 300.0);
        nav.unmount(&mut env);
        nav.mount(&mut env);
        assert!(!nav.state().scrolled());
        assert_eq!(env.listeners().len(), 2);
    }

    #[test]
    fn closure_renderer_receives_snapshots() {
        let mut env = MemoryEnvironment::with_all_regions();
        let mut seen = Vec::new();
        {
            let mut nav = NavigationComponent::new(
                ScrollClassifier::default(),
                SectionObserver::default(),
                |snapshot: &NavigationViewState| seen.push(snapshot.menu_open()),
            );
            nav.mount(&mut env);
            nav.toggle(&mut env);
            nav.toggle(&mut env);
        }
        assert_eq!(seen, vec![false, true, false]);
    }
}
