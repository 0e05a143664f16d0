//! The simulated events page the navigation scrolls over.
//!
//! Sections are stacked vertically with no gaps. Geometry is kept in terminal
//! rows; the navigation sees offsets in page units (`UNITS_PER_ROW` per row) so
//! the scroll threshold keeps its web-sized meaning.

mod content;

use techevents_types::SectionId;

use crate::ui::components::common::ScrollMetrics;
use content::SECTIONS;

/// Page units reported per terminal row.
pub const UNITS_PER_ROW: f64 = 10.0;

/// Rows moved by one wheel notch or arrow press.
pub const SCROLL_STEP: i16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub id: SectionId,
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// First row of the section, relative to the page top.
    pub top: u16,
    pub height: u16,
}

impl PageSection {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Layout of the page plus the current scroll position.
#[derive(Debug, Clone)]
pub struct PageState {
    sections: Vec<PageSection>,
    metrics: ScrollMetrics,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    /// The events page with all three sections.
    pub fn new() -> Self {
        Self::with_sections(SECTIONS.iter().map(|copy| (copy.id, copy.title, copy.lines, copy.height)))
    }

    /// A page built from `(id, title, lines, height)` tuples, stacked in order.
    pub fn with_sections(
        sections: impl IntoIterator<Item = (SectionId, &'static str, &'static [&'static str], u16)>,
    ) -> Self {
        let mut top = 0u16;
        let sections: Vec<PageSection> = sections
            .into_iter()
            .map(|(id, title, lines, height)| {
                let section = PageSection {
                    id,
                    title,
                    lines,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                section
            })
            .collect();
        let mut metrics = ScrollMetrics::default();
        metrics.update_content_height(top);
        Self { sections, metrics }
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&PageSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn has_section(&self, id: SectionId) -> bool {
        self.section(id).is_some()
    }

    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    pub fn set_viewport_height(&mut self, rows: u16) {
        self.metrics.update_viewport_height(rows);
    }

    /// Current scroll position in page units.
    pub fn offset_units(&self) -> f64 {
        f64::from(self.metrics.offset()) * UNITS_PER_ROW
    }

    pub fn scroll_lines(&mut self, delta: i16) -> bool {
        self.metrics.scroll_lines(delta)
    }

    pub fn scroll_pages(&mut self, delta: i16) -> bool {
        self.metrics.scroll_pages(delta)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.metrics.scroll_to_top()
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.metrics.scroll_to_bottom()
    }

    /// Scrolls so the section starts at the viewport top, as far as the page allows.
    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        match self.section(id).map(|section| section.top) {
            Some(top) => self.metrics.scroll_to(top),
            None => false,
        }
    }

    /// Fraction of the section inside the viewport after trimming `root_margin`
    /// rows from its top and bottom.
    pub fn visibility(&self, id: SectionId, root_margin: f64) -> f64 {
        let Some(section) = self.section(id) else {
            return 0.0;
        };
        if section.height == 0 {
            return 0.0;
        }
        let offset = f64::from(self.metrics.offset());
        let viewport_top = offset + root_margin;
        let viewport_bottom = offset + f64::from(self.metrics.viewport_height()) - root_margin;
        let top = f64::from(section.top).max(viewport_top);
        let bottom = f64::from(section.bottom()).min(viewport_bottom);
        ((bottom - top).max(0.0) / f64::from(section.height)).clamp(0.0, 1.0)
    }
}
