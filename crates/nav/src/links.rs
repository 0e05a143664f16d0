//! Read-only presentation queries derived from a snapshot.
//!
//! Renderers decide how each variant looks; these helpers only decide which
//! variant applies. Desktop and mobile link styles consult the same
//! [`NavigationViewState::is_link_active`] answer.

use techevents_types::Href;

use crate::NavigationViewState;

/// Visual variant of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Active,
    Idle,
}

/// Header treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Flat,
    /// Applied once the page has scrolled past the threshold.
    Elevated,
}

/// Icon shown on the menu toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Hamburger; the menu is closed.
    Menu,
    /// Cross; the menu is open.
    Close,
}

impl NavigationViewState {
    /// A link is active when it matches the active section, with `/` also
    /// matching `#home` because scroll detection reports the landing section
    /// by its fragment.
    pub fn is_link_active(&self, href: Href) -> bool {
        let active = self.active_section().href();
        active == Some(href) || (href == Href::Root && active == Some(Href::Home))
    }

    pub fn link_variant(&self, href: Href) -> LinkVariant {
        if self.is_link_active(href) { LinkVariant::Active } else { LinkVariant::Idle }
    }

    pub fn chrome(&self) -> Chrome {
        if self.scrolled() { Chrome::Elevated } else { Chrome::Flat }
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        if self.menu_open() { ToggleIcon::Close } else { ToggleIcon::Menu }
    }
}
