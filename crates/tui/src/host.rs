//! Terminal-side [`Environment`] for the navigation component.
//!
//! The host owns the listener registry and turns terminal happenings (page
//! scrolls, mouse presses, viewport geometry) into [`PlatformEvent`]s, but only
//! for signals somebody is listening to. Intersection batches follow viewport
//! observer rules: the first batch after observing carries every observed
//! section, later batches only the sections whose intersecting state flipped.

use std::collections::HashMap;

use techevents_nav::{Environment, ListenerKind, ListenerRegistry, PlatformEvent, Subscription};
use techevents_types::{IntersectionEntry, ObserverOptions, Point, SectionId};
use tracing::trace;

use crate::page::PageState;

#[derive(Debug, Default)]
pub struct TerminalHost {
    regions: Vec<SectionId>,
    listeners: ListenerRegistry,
    last_scroll: Option<f64>,
    /// Last reported intersecting state, per observation.
    reported: HashMap<Subscription, HashMap<SectionId, bool>>,
}

impl TerminalHost {
    /// A host whose page has an addressable region for every section in `page`.
    pub fn for_page(page: &PageState) -> Self {
        Self {
            regions: page.sections().iter().map(|section| section.id).collect(),
            ..Self::default()
        }
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Scroll signal for `offset` (page units); `None` when unchanged or unobserved.
    pub fn scroll_signal(&mut self, offset: f64) -> Option<PlatformEvent> {
        if !self.listeners.is_listening(ListenerKind::Scroll) || self.last_scroll == Some(offset) {
            return None;
        }
        self.last_scroll = Some(offset);
        Some(PlatformEvent::Scroll(offset))
    }

    pub fn pointer_signal(&self, point: Point) -> Option<PlatformEvent> {
        self.listeners
            .is_listening(ListenerKind::PointerDown)
            .then_some(PlatformEvent::PointerDown(point))
    }

    /// Intersection batches for the current page geometry, one per live observation.
    pub fn intersection_signals(&mut self, page: &PageState) -> Vec<PlatformEvent> {
        let mut batches = Vec::new();
        for (subscription, observation) in self.listeners.observations() {
            let previous = self.reported.get(&subscription);
            let entries: Vec<IntersectionEntry> = observation
                .sections
                .iter()
                .map(|section| measure(page, *section, observation.options))
                .filter(|entry| {
                    previous
                        .and_then(|reported| reported.get(&entry.section))
                        .is_none_or(|was_intersecting| *was_intersecting != entry.is_intersecting)
                })
                .collect();
            if entries.is_empty() {
                continue;
            }
            trace!(records = entries.len(), "intersection batch");
            let reported = self.reported.entry(subscription).or_default();
            for entry in &entries {
                reported.insert(entry.section, entry.is_intersecting);
            }
            batches.push(PlatformEvent::Intersections(entries));
        }
        batches
    }

    /// Forget reported state so the next geometry pass delivers full batches.
    pub fn reset_observations(&mut self) {
        self.reported.clear();
    }
}

fn measure(page: &PageState, section: SectionId, options: ObserverOptions) -> IntersectionEntry {
    let ratio = page.visibility(section, options.root_margin);
    IntersectionEntry::new(section, ratio > 0.0 && ratio >= options.threshold, ratio)
}

impl Environment for TerminalHost {
    fn has_region(&self, section: SectionId) -> bool {
        self.regions.contains(&section)
    }

    fn subscribe_scroll(&mut self) -> Subscription {
        self.listeners.register(ListenerKind::Scroll)
    }

    fn subscribe_pointer_down(&mut self) -> Subscription {
        self.listeners.register(ListenerKind::PointerDown)
    }

    fn observe_regions(&mut self, sections: &[SectionId], options: ObserverOptions) -> Subscription {
        self.listeners.register_observation(sections, options)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        if !self.listeners.release(subscription) {
            return;
        }
        match subscription.kind() {
            ListenerKind::Scroll => self.last_scroll = None,
            ListenerKind::Intersection => {
                self.reported.remove(&subscription);
            }
            ListenerKind::PointerDown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PageState, TerminalHost) {
        let mut page = PageState::new();
        page.set_viewport_height(36);
        let host = TerminalHost::for_page(&page);
        (page, host)
    }

    fn sections(event: &PlatformEvent) -> Vec<(SectionId, bool)> {
        match event {
            PlatformEvent::Intersections(entries) => {
                entries.iter().map(|entry| (entry.section, entry.is_intersecting)).collect()
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn nothing_is_delivered_without_listeners() {
        let (page, mut host) = setup();
        assert!(host.scroll_signal(10.0).is_none());
        assert!(host.pointer_signal(Point::new(1, 1)).is_none());
        assert!(host.intersection_signals(&page).is_empty());
    }

    #[test]
    fn scroll_signals_skip_repeated_offsets() {
        let (_, mut host) = setup();
        let subscription = host.subscribe_scroll();
        assert_eq!(host.scroll_signal(0.0), Some(PlatformEvent::Scroll(0.0)));
        assert!(host.scroll_signal(0.0).is_none());
        assert!(host.scroll_signal(30.0).is_some());

        host.unsubscribe(subscription);
        host.subscribe_scroll();
        assert!(host.scroll_signal(30.0).is_some());
    }

    #[test]
    fn first_batch_is_full_then_only_threshold_crossings() {
        let (mut page, mut host) = setup();
        host.observe_regions(&SectionId::WATCHED, ObserverOptions::default());

        let batches = host.intersection_signals(&page);
        assert_eq!(batches.len(), 1);
        assert_eq!(
            sections(&batches[0]),
            vec![
                (SectionId::Home, true),
                (SectionId::Event, true),
                (SectionId::EventForm, false)
            ]
        );
        assert!(host.intersection_signals(&page).is_empty());

        page.scroll_to_section(SectionId::EventForm);
        let batches = host.intersection_signals(&page);
        assert_eq!(
            sections(&batches[0]),
            vec![(SectionId::Home, false), (SectionId::EventForm, true)]
        );
    }

    #[test]
    fn reset_replays_a_full_batch() {
        let (page, mut host) = setup();
        host.observe_regions(&SectionId::WATCHED, ObserverOptions::default());
        host.intersection_signals(&page);
        host.reset_observations();
        let batches = host.intersection_signals(&page);
        assert_eq!(sections(&batches[0]).len(), 3);
    }

    #[test]
    fn regions_come_from_the_page() {
        let (_, host) = setup();
        assert!(SectionId::WATCHED.iter().all(|section| host.has_region(*section)));
    }
}
