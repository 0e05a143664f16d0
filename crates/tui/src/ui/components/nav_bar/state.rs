//! Geometry of the navigation header and the mobile overlay.
//!
//! Layout is recomputed on resize and kept in [`NavBarState`] so mouse hit
//! testing sees exactly what was drawn. Nothing here depends on the navigation
//! snapshot; the overlay rectangle is reserved in mobile mode and only drawn
//! while the menu is open.

use ratatui::layout::Rect;
use techevents_types::{Href, NAV_LINKS, Point};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::MainLayout;
use crate::ui::utils::rect_contains;

pub const BRAND_TEXT: &str = "Tech Events ✦";
pub const TAGLINE: &str = "✦ Discover Amazing Events ✦";

const EDGE_PADDING: u16 = 2;
const LINK_GAP: u16 = 1;
const TOGGLE_WIDTH: u16 = 3;
const OVERLAY_MIN_WIDTH: u16 = 24;
/// Rows between consecutive overlay links.
const OVERLAY_LINK_STRIDE: u16 = 2;

/// Which header variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Link row in the header.
    #[default]
    Desktop,
    /// Toggle button plus slide-in overlay.
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: u16, mobile_breakpoint: u16) -> Self {
        if width < mobile_breakpoint { LayoutMode::Mobile } else { LayoutMode::Desktop }
    }
}

/// Something clickable in the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarTarget {
    Toggle,
    Brand,
    Link(Href),
}

/// Rectangles for every navigation element at one terminal size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBarLayout {
    pub mode: LayoutMode,
    pub header: Rect,
    pub brand: Rect,
    pub desktop_links: Vec<(Href, Rect)>,
    pub toggle: Option<Rect>,
    pub overlay: Option<Rect>,
    pub overlay_links: Vec<(Href, Rect)>,
    pub tagline: Option<Rect>,
}

impl NavBarLayout {
    pub fn compute(area: Rect, mode: LayoutMode) -> Self {
        let [header, body, _] = MainLayout::split(area);
        let row = header.y + header.height / 2;
        let brand_width = (BRAND_TEXT.width() as u16).min(header.width.saturating_sub(EDGE_PADDING));
        let brand = Rect::new(header.x + EDGE_PADDING.min(header.width), row, brand_width, 1);

        let mut layout = Self {
            mode,
            header,
            brand,
            ..Self::default()
        };
        match mode {
            LayoutMode::Desktop => layout.desktop_links = desktop_links(header, row),
            LayoutMode::Mobile => {
                let right = header.right().saturating_sub(EDGE_PADDING);
                layout.toggle = Some(Rect::new(right.saturating_sub(TOGGLE_WIDTH), row, TOGGLE_WIDTH, 1));
                let overlay = overlay_rect(body);
                layout.overlay_links = overlay_links(overlay);
                layout.tagline = (overlay.height >= 3).then(|| {
                    Rect::new(overlay.x, overlay.bottom() - 2, overlay.width, 1)
                });
                layout.overlay = Some(overlay);
            }
        }
        layout
    }

    /// The element under `point`. Overlay links only count while the menu is open.
    pub fn hit(&self, point: Point, menu_open: bool) -> Option<NavBarTarget> {
        if self.toggle.is_some_and(|toggle| rect_contains(toggle, point)) {
            return Some(NavBarTarget::Toggle);
        }
        if menu_open
            && let Some((href, _)) = self.overlay_links.iter().find(|(_, rect)| rect_contains(*rect, point))
        {
            return Some(NavBarTarget::Link(*href));
        }
        if let Some((href, _)) = self.desktop_links.iter().find(|(_, rect)| rect_contains(*rect, point)) {
            return Some(NavBarTarget::Link(*href));
        }
        rect_contains(self.brand, point).then_some(NavBarTarget::Brand)
    }
}

/// Pill width for a link label: one space of padding on each side.
pub fn pill_width(label: &str) -> u16 {
    label.width() as u16 + 2
}

fn desktop_links(header: Rect, row: u16) -> Vec<(Href, Rect)> {
    let total: u16 = NAV_LINKS.iter().map(|link| pill_width(link.label)).sum::<u16>()
        + LINK_GAP * (NAV_LINKS.len() as u16 - 1);
    let mut x = header.right().saturating_sub(EDGE_PADDING + total).max(header.x);
    NAV_LINKS
        .iter()
        .map(|link| {
            let width = pill_width(link.label);
            let rect = Rect::new(x, row, width, 1).intersection(header);
            x = x.saturating_add(width + LINK_GAP);
            (link.href, rect)
        })
        .collect()
}

fn overlay_rect(body: Rect) -> Rect {
    let width = (body.width * 2 / 3).max(OVERLAY_MIN_WIDTH).min(body.width);
    Rect::new(body.x, body.y, width, body.height)
}

fn overlay_links(overlay: Rect) -> Vec<(Href, Rect)> {
    let inner_width = overlay.width.saturating_sub(EDGE_PADDING * 2);
    NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let y = overlay.y + 1 + index as u16 * OVERLAY_LINK_STRIDE;
            let rect = Rect::new(overlay.x + EDGE_PADDING, y, inner_width, 1).intersection(overlay);
            (link.href, rect)
        })
        .collect()
}

/// Navigation bar state owned by the app.
#[derive(Debug, Clone, Default)]
pub struct NavBarState {
    pub layout: NavBarLayout,
}

impl NavBarState {
    pub fn mode(&self) -> LayoutMode {
        self.layout.mode
    }
}
