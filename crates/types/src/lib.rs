//! Shared vocabulary for the Tech Events navigation workspace.
//!
//! Everything here is plain data: identifiers for the watched page sections,
//! link targets, the intersection records a viewport observer delivers, and the
//! small geometry types used for outside-click detection. The state machine in
//! `techevents-nav` and the terminal host in `techevents-tui` both speak in
//! these types so neither needs to know about the other.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A page region the navigation watches for visibility.
///
/// The declaration order is the watch order used at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Event,
    #[serde(rename = "eventform")]
    EventForm,
}

impl SectionId {
    /// Sections watched by the navigation, in observation order.
    pub const WATCHED: [SectionId; 3] = [SectionId::Home, SectionId::Event, SectionId::EventForm];

    /// Element identifier of the region in the hosting page (`home`, `event`, `eventform`).
    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Event => "event",
            SectionId::EventForm => "eventform",
        }
    }

    /// Fragment link pointing at this section (`#home`, ...).
    pub const fn href(self) -> Href {
        match self {
            SectionId::Home => Href::Home,
            SectionId::Event => Href::Event,
            SectionId::EventForm => Href::EventForm,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Navigation target of a link, or a value the active-section slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Href {
    /// `/`, the landing route.
    #[serde(rename = "/")]
    Root,
    #[serde(rename = "#home")]
    Home,
    #[serde(rename = "#event")]
    Event,
    #[serde(rename = "#eventform")]
    EventForm,
    /// `/auth`, the login/signup route.
    #[serde(rename = "/auth")]
    Auth,
}

impl Href {
    pub const fn as_str(self) -> &'static str {
        match self {
            Href::Root => "/",
            Href::Home => "#home",
            Href::Event => "#event",
            Href::EventForm => "#eventform",
            Href::Auth => "/auth",
        }
    }

    /// The in-page section a fragment link scrolls to, if any.
    pub const fn section(self) -> Option<SectionId> {
        match self {
            Href::Home => Some(SectionId::Home),
            Href::Event => Some(SectionId::Event),
            Href::EventForm => Some(SectionId::EventForm),
            Href::Root | Href::Auth => None,
        }
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The section (or route) currently highlighted in the navigation.
///
/// `None` means no section is dominant yet and renders as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSection(Option<Href>);

impl ActiveSection {
    pub const fn new(href: Href) -> Self {
        Self(Some(href))
    }

    pub const fn href(self) -> Option<Href> {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(self) -> &'static str {
        self.0.map(Href::as_str).unwrap_or("")
    }
}

impl Serialize for ActiveSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visibility measurement for a watched section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Visible fraction of the section, in `0.0..=1.0`.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn new(section: SectionId, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            section,
            is_intersecting,
            intersection_ratio,
        }
    }
}

/// Viewport configuration requested when observing sections.
///
/// The root is always the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Inset applied to the top and bottom of the viewport before measuring.
    pub root_margin: f64,
    /// Minimum visible fraction for a section to count as intersecting.
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: 0.0,
            threshold: 0.5,
        }
    }
}

/// How to pick a winner when several intersecting sections share the highest ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lowest section identifier wins (`event` < `eventform` < `home`).
    #[default]
    Lexicographic,
    /// First record in delivery order wins.
    BatchOrder,
}

/// A location on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        let right = u32::from(self.x) + u32::from(self.width);
        let bottom = u32::from(self.y) + u32::from(self.height);
        point.x >= self.x && u32::from(point.x) < right && point.y >= self.y && u32::from(point.y) < bottom
    }
}

/// A navigation entry shown in both the desktop row and the mobile overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: Href,
}

/// Target of the brand/logo link.
pub const BRAND_HREF: Href = Href::Root;

/// The navigation entries, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: Href::Root,
    },
    NavLink {
        label: "View Events",
        href: Href::Event,
    },
    NavLink {
        label: "Add Events",
        href: Href::EventForm,
    },
    NavLink {
        label: "Login / Signup",
        href: Href::Auth,
    },
];

/// Side effects requested by the navigation component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Ask the routing collaborator to navigate to a target.
    Navigate(Href),
}
