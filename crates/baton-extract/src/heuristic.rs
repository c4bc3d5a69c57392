//! Failure detection over natural-language output.
//!
//! Detecting "subject not found" via a substring match is inherently fragile
//! (legitimate content could quote the marker phrase), so the heuristic lives
//! behind a trait and can be swapped without touching handler logic.

/// Decides whether extraction output signals a failed lookup.
pub trait FailureHeuristic: Send + Sync {
    /// Returns the matching marker if the output indicates the prior session
    /// could not be found.
    fn detect(&self, output: &str) -> Option<String>;
}

/// Case-insensitive substring scan of the full output against a marker list.
///
/// The marker may appear anywhere in mixed output, not just at a prefix.
pub struct MarkerHeuristic {
    markers: Vec<String>,
}

impl MarkerHeuristic {
    /// Build from configured marker strings.
    #[must_use]
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

impl FailureHeuristic for MarkerHeuristic {
    fn detect(&self, output: &str) -> Option<String> {
        let haystack = output.to_lowercase();
        self.markers
            .iter()
            .find(|m| !m.is_empty() && haystack.contains(&m.to_lowercase()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> MarkerHeuristic {
        MarkerHeuristic::new(vec!["no conversation found".to_string()])
    }

    #[test]
    fn clean_output_passes() {
        assert!(heuristic().detect("## Goal\nShip the parser").is_none());
    }

    #[test]
    fn marker_at_start_detected() {
        assert!(heuristic().detect("No conversation found for ID s1").is_some());
    }

    #[test]
    fn marker_mid_output_detected() {
        let output = "Some preamble\nerror: no conversation found\ntrailing";
        assert_eq!(
            heuristic().detect(output).as_deref(),
            Some("no conversation found")
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(heuristic().detect("NO CONVERSATION FOUND").is_some());
    }

    #[test]
    fn empty_marker_never_matches() {
        let h = MarkerHeuristic::new(vec![String::new()]);
        assert!(h.detect("anything").is_none());
    }

    #[test]
    fn no_markers_never_match() {
        let h = MarkerHeuristic::new(vec![]);
        assert!(h.detect("no conversation found").is_none());
    }
}
