//! Immutable navigation snapshot and its transitions.
//!
//! Every transition consumes a snapshot and returns the next one. The
//! component compares the two to decide whether anything needs re-rendering,
//! so transitions never have side effects of their own.

use serde::Serialize;
use techevents_types::{ActiveSection, Bounds, Href, IntersectionEntry, Point};

use crate::{ScrollClassifier, SectionObserver};

/// The complete view state of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationViewState {
    scrolled: bool,
    active_section: ActiveSection,
    menu_open: bool,
}

impl NavigationViewState {
    /// Whether the header shows its elevated treatment.
    pub const fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub const fn active_section(&self) -> ActiveSection {
        self.active_section
    }

    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Reclassifies the header chrome for a new scroll offset.
    pub fn with_scroll_offset(self, offset: f64, classifier: &ScrollClassifier) -> Self {
        Self {
            scrolled: classifier.is_scrolled(offset),
            ..self
        }
    }

    /// Applies an intersection batch. Keeps the previous active section when no
    /// record in the batch is intersecting.
    pub fn with_intersections(self, batch: &[IntersectionEntry], observer: &SectionObserver) -> Self {
        match observer.dominant(batch) {
            Some(section) => Self {
                active_section: ActiveSection::new(section.href()),
                ..self
            },
            None => self,
        }
    }

    /// Flips the mobile menu.
    pub fn toggled(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// Records a link activation: `/` highlights the home section, every other
    /// target is stored as-is, and the menu always closes.
    pub fn with_link_selected(self, target: Href) -> Self {
        let active = match target {
            Href::Root => Href::Home,
            other => other,
        };
        Self {
            active_section: ActiveSection::new(active),
            menu_open: false,
            ..self
        }
    }

    /// Closes the menu when `click` lands outside the overlay.
    ///
    /// An unknown overlay (`None`) is never "outside", so the click is ignored.
    pub fn dismissed_if_outside(self, click: Point, overlay: Option<Bounds>) -> Self {
        match overlay {
            Some(bounds) if self.menu_open && !bounds.contains(click) => Self {
                menu_open: false,
                ..self
            },
            _ => self,
        }
    }
}
