//! Scroll offset classification for the header chrome.

/// Offset past which the header switches to its elevated treatment.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Converts a vertical scroll offset into the "scrolled" flag.
///
/// There is no hysteresis band: an offset exactly at the threshold is not
/// scrolled, anything strictly above it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollClassifier {
    threshold: f64,
}

impl ScrollClassifier {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.threshold
    }
}

impl Default for ScrollClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let classifier = ScrollClassifier::default();
        assert!(!classifier.is_scrolled(0.0));
        assert!(!classifier.is_scrolled(49.9));
        assert!(!classifier.is_scrolled(50.0));
        assert!(classifier.is_scrolled(50.0001));
        assert!(classifier.is_scrolled(120.0));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let classifier = ScrollClassifier::new(8.0);
        assert!(!classifier.is_scrolled(8.0));
        assert!(classifier.is_scrolled(9.0));
    }
}
