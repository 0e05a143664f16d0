//! Seams between the navigation component and its host.
//!
//! The component never reaches into ambient page state. Its host hands it an
//! [`Environment`] that can register listeners for the three platform signals
//! it consumes, and a [`Renderer`] that receives committed snapshots. Every
//! registration returns a [`Subscription`] that must be released through the
//! same environment.

use indexmap::IndexMap;
use techevents_types::{ObserverOptions, SectionId};

use crate::NavigationViewState;

/// Which platform signal a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    PointerDown,
    Intersection,
}

/// Handle for a live listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
}

impl Subscription {
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }
}

/// Event sources and page lookups supplied by the host.
pub trait Environment {
    /// Whether the hosting page currently has an addressable region for `section`.
    fn has_region(&self, section: SectionId) -> bool;

    /// Start delivering vertical scroll offsets.
    fn subscribe_scroll(&mut self) -> Subscription;

    /// Start delivering pointer-down locations.
    fn subscribe_pointer_down(&mut self) -> Subscription;

    /// Start delivering intersection batches for `sections`.
    fn observe_regions(&mut self, sections: &[SectionId], options: ObserverOptions) -> Subscription;

    /// Release a registration. Releasing an unknown handle is a no-op.
    fn unsubscribe(&mut self, subscription: Subscription);
}

/// Consumes committed snapshots.
pub trait Renderer {
    fn render(&mut self, snapshot: &NavigationViewState);
}

impl<F> Renderer for F
where
    F: FnMut(&NavigationViewState),
{
    fn render(&mut self, snapshot: &NavigationViewState) {
        self(snapshot)
    }
}

/// Sections and viewport options attached to an intersection listener.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub sections: Vec<SectionId>,
    pub options: ObserverOptions,
}

/// Bookkeeping for live listeners, meant to be embedded in hosts.
///
/// Hosts consult it before dispatching so a signal nobody listens for is
/// never delivered.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: IndexMap<Subscription, Option<Observation>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ListenerKind) -> Subscription {
        self.insert(kind, None)
    }

    pub fn register_observation(&mut self, sections: &[SectionId], options: ObserverOptions) -> Subscription {
        let observation = Observation {
            sections: sections.to_vec(),
            options,
        };
        self.insert(ListenerKind::Intersection, Some(observation))
    }

    /// Removes a registration; returns whether it was live.
    pub fn release(&mut self, subscription: Subscription) -> bool {
        self.listeners.shift_remove(&subscription).is_some()
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.keys().any(|subscription| subscription.kind == kind)
    }

    /// Live intersection observations, oldest first.
    pub fn observations(&self) -> impl Iterator<Item = (Subscription, &Observation)> {
        self.listeners
            .iter()
            .filter_map(|(subscription, observation)| observation.as_ref().map(|observation| (*subscription, observation)))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn insert(&mut self, kind: ListenerKind, observation: Option<Observation>) -> Subscription {
        self.next_id += 1;
        let subscription = Subscription { id: self.next_id, kind };
        self.listeners.insert(subscription, observation);
        subscription
    }
}

/// Environment with a fixed set of page regions and no real event source.
///
/// Used by scripted replays and tests; callers feed events to the component
/// themselves and check [`MemoryEnvironment::listeners`] to see what is attached.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    regions: Vec<SectionId>,
    listeners: ListenerRegistry,
}

impl MemoryEnvironment {
    pub fn new(regions: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// A page containing every watched section.
    pub fn with_all_regions() -> Self {
        Self::new(SectionId::WATCHED)
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

impl Environment for MemoryEnvironment {
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
        self.listeners.release(subscription);
    }
}
