//! Injection payload framing.
//!
//! Wraps the extracted content in lifecycle framing text appropriate to the
//! reset kind. The trigger influences phrasing only, never control flow.

use baton_core::{HandoffArtifact, ResetKind};
use baton_core::events::ResetTrigger;

/// Build the text injected into the successor session.
#[must_use]
pub fn frame_injection(artifact: &HandoffArtifact) -> String {
    let opening = match (artifact.reset_kind, artifact.trigger) {
        (ResetKind::Compaction, ResetTrigger::Manual) => {
            "Context carried over from the session you just compacted."
        }
        (ResetKind::Compaction, ResetTrigger::Auto) => {
            "Context carried over from the previous session, which was compacted automatically."
        }
        (ResetKind::Clear, _) => "Context carried over from the session cleared just now.",
    };

    let mut payload = String::from(opening);
    if !artifact.goal.is_empty() {
        payload.push_str("\nDeclared goal: ");
        payload.push_str(&artifact.goal);
    }
    payload.push_str("\n\n");
    payload.push_str(&artifact.content);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use baton_core::SessionId;

    fn artifact(kind: ResetKind, trigger: ResetTrigger, goal: &str) -> HandoffArtifact {
        HandoffArtifact::new(
            SessionId::from("s1"),
            goal.to_string(),
            "## Summary\nbody".to_string(),
            trigger,
            kind,
        )
    }

    #[test]
    fn compaction_manual_phrasing() {
        let payload = frame_injection(&artifact(
            ResetKind::Compaction,
            ResetTrigger::Manual,
            "ship it",
        ));
        assert!(payload.starts_with("Context carried over from the session you just compacted."));
        assert!(payload.contains("Declared goal: ship it"));
        assert!(payload.ends_with("## Summary\nbody"));
    }

    #[test]
    fn compaction_auto_phrasing_differs() {
        let payload = frame_injection(&artifact(ResetKind::Compaction, ResetTrigger::Auto, "g"));
        assert!(payload.contains("compacted automatically"));
    }

    #[test]
    fn clear_phrasing_ignores_trigger() {
        let manual = frame_injection(&artifact(ResetKind::Clear, ResetTrigger::Manual, "g"));
        let auto = frame_injection(&artifact(ResetKind::Clear, ResetTrigger::Auto, "g"));
        assert_eq!(manual, auto);
        assert!(manual.contains("cleared just now"));
    }

    #[test]
    fn empty_goal_omits_goal_line() {
        let payload = frame_injection(&artifact(ResetKind::Compaction, ResetTrigger::Manual, ""));
        assert!(!payload.contains("Declared goal:"));
        assert!(payload.contains("## Summary"));
    }
}
