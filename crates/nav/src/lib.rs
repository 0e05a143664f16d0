//! Navigation view-state machine for the Tech Events page header.
//!
//! The crate is split along the three behaviors that share one snapshot:
//!
//! - [`ScrollClassifier`]: scroll offset to the "elevated chrome" flag.
//! - [`SectionObserver`]: intersection batches to the active section.
//! - menu transitions on [`NavigationViewState`]: toggle, link selection and
//!   outside-click dismissal.
//!
//! [`NavigationComponent`] binds them to a host through the [`Environment`] and
//! [`Renderer`] seams and owns listener lifecycle.

mod component;
mod environment;
mod links;
mod scroll;
mod sections;
mod state;

pub use component::{NavigationComponent, PlatformEvent};
pub use environment::{
    Environment, ListenerKind, ListenerRegistry, MemoryEnvironment, Observation, Renderer, Subscription,
};
pub use links::{Chrome, LinkVariant, ToggleIcon};
pub use scroll::{DEFAULT_SCROLL_THRESHOLD, ScrollClassifier};
pub use sections::SectionObserver;
pub use state::NavigationViewState;
