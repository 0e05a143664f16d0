//! Active-section selection from viewport intersection batches.
//!
//! A batch holds the records the viewport observer delivered together. Only
//! intersecting records compete; the one with the greatest visible ratio wins.
//! When nothing in the batch is intersecting the observer reports no winner and
//! the caller keeps whatever section was active before, so the highlighted link
//! never blinks off while the user scrolls quickly between sections.

use techevents_types::{IntersectionEntry, ObserverOptions, SectionId, TieBreak};

/// Decides which watched section dominates the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionObserver {
    options: ObserverOptions,
    tie_break: TieBreak,
}

impl SectionObserver {
    pub const fn new(options: ObserverOptions, tie_break: TieBreak) -> Self {
        Self { options, tie_break }
    }

    /// Sections to observe, in observation order. Fixed for the component's lifetime.
    pub const fn watched(&self) -> &'static [SectionId] {
        &SectionId::WATCHED
    }

    pub const fn options(&self) -> ObserverOptions {
        self.options
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns the section with the strictly greatest ratio among intersecting
    /// records, or `None` when no record qualifies.
    ///
    /// A record needs a ratio above zero to win; NaN ratios never win.
    pub fn dominant(&self, batch: &[IntersectionEntry]) -> Option<SectionId> {
        let mut best: Option<&IntersectionEntry> = None;
        for entry in batch.iter().filter(|entry| entry.is_intersecting) {
            let ratio = entry.intersection_ratio;
            best = match best {
                None if ratio > 0.0 => Some(entry),
                Some(current) if ratio > current.intersection_ratio => Some(entry),
                Some(current) if ratio == current.intersection_ratio && self.prefers(entry.section, current.section) => {
                    Some(entry)
                }
                other => other,
            };
        }
        best.map(|entry| entry.section)
    }

    /// Whether `challenger` beats `incumbent` on an exact ratio tie.
    fn prefers(&self, challenger: SectionId, incumbent: SectionId) -> bool {
        match self.tie_break {
            TieBreak::Lexicographic => challenger.id() < incumbent.id(),
            TieBreak::BatchOrder => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section: SectionId, is_intersecting: bool, ratio: f64) -> IntersectionEntry {
        IntersectionEntry::new(section, is_intersecting, ratio)
    }

    #[test]
    fn highest_intersecting_ratio_wins() {
        let observer = SectionObserver::default();
        let batch = [
            entry(SectionId::Home, true, 0.6),
            entry(SectionId::Event, true, 0.8),
            entry(SectionId::EventForm, false, 0.3),
        ];
        assert_eq!(observer.dominant(&batch), Some(SectionId::Event));
    }

    #[test]
    fn non_intersecting_records_never_win_even_with_higher_ratio() {
        let observer = SectionObserver::default();
        let batch = [entry(SectionId::Home, false, 0.9), entry(SectionId::EventForm, true, 0.55)];
        assert_eq!(observer.dominant(&batch), Some(SectionId::EventForm));
    }

    #[test]
    fn batch_without_intersections_has_no_winner() {
        let observer = SectionObserver::default();
        let batch = [entry(SectionId::Home, false, 0.2), entry(SectionId::Event, false, 0.0)];
        assert_eq!(observer.dominant(&batch), None);
        assert_eq!(observer.dominant(&[]), None);
    }

    #[test]
    fn zero_ratio_intersections_are_ignored() {
        let observer = SectionObserver::default();
        assert_eq!(observer.dominant(&[entry(SectionId::Event, true, 0.0)]), None);
        assert_eq!(observer.dominant(&[entry(SectionId::Event, true, f64::NAN)]), None);

        let mixed = [
            entry(SectionId::Home, true, f64::NAN),
            entry(SectionId::Event, true, 0.3),
            entry(SectionId::EventForm, true, f64::NAN),
        ];
        assert_eq!(observer.dominant(&mixed), Some(SectionId::Event));
    }

    #[test]
    fn lexicographic_tie_break_ignores_delivery_order() {
        let observer = SectionObserver::new(ObserverOptions::default(), TieBreak::Lexicographic);
        let forward = [entry(SectionId::Home, true, 0.7), entry(SectionId::EventForm, true, 0.7)];
        let reversed = [entry(SectionId::EventForm, true, 0.7), entry(SectionId::Home, true, 0.7)];
        assert_eq!(observer.dominant(&forward), Some(SectionId::EventForm));
        assert_eq!(observer.dominant(&reversed), Some(SectionId::EventForm));

        let with_event = [
            entry(SectionId::EventForm, true, 0.7),
            entry(SectionId::Event, true, 0.7),
        ];
        assert_eq!(observer.dominant(&with_event), Some(SectionId::Event));
    }

    #[test]
    fn batch_order_tie_break_keeps_first_record() {
        let observer = SectionObserver::new(ObserverOptions::default(), TieBreak::BatchOrder);
        let batch = [entry(SectionId::Home, true, 0.7), entry(SectionId::Event, true, 0.7)];
        assert_eq!(observer.dominant(&batch), Some(SectionId::Home));
        let batch = [entry(SectionId::Event, true, 0.7), entry(SectionId::Home, true, 0.7)];
        assert_eq!(observer.dominant(&batch), Some(SectionId::Event));
    }

    #[test]
    fn watches_the_three_page_sections_in_order() {
        let observer = SectionObserver::default();
        let ids: Vec<&str> = observer.watched().iter().map(|section| section.id()).collect();
        assert_eq!(ids, ["home", "event", "eventform"]);
        assert_eq!(observer.options().threshold, 0.5);
    }
}
