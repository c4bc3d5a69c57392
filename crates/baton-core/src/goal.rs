//! The goal parser.
//!
//! A pure, deterministic function over the instruction text attached to a
//! reset request. Two mutually exclusive markers are recognized, and only
//! when they sit at the very start of the string; a marker appearing
//! anywhere else must not trigger a handoff.

use serde::{Deserialize, Serialize};

/// The marker strings the parser recognizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalMarkers {
    /// Generate-and-discard variant.
    pub ephemeral: String,
    /// Generate-and-persist-externally variant.
    pub persist_to_file: String,
}

impl Default for GoalMarkers {
    fn default() -> Self {
        Self {
            ephemeral: "handoff:".to_string(),
            persist_to_file: "handoff-file:".to_string(),
        }
    }
}

/// Outcome of parsing an instruction string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGoal {
    /// Whether the instruction requests a handoff at all.
    pub triggers: bool,
    /// Whether the persist-to-file variant was requested.
    pub persist_to_file: bool,
    /// The goal text with the marker and leading whitespace stripped.
    /// Empty when `triggers` is false, and legally empty when the
    /// instruction body after the marker is blank.
    pub goal: String,
}

impl ParsedGoal {
    /// Parse an instruction string against the given markers.
    ///
    /// The persist marker is tested first so an ephemeral marker that is a
    /// prefix of it cannot shadow the longer match.
    #[must_use]
    pub fn parse(instruction: &str, markers: &GoalMarkers) -> Self {
        if let Some(rest) = instruction.strip_prefix(&markers.persist_to_file) {
            return Self {
                triggers: true,
                persist_to_file: true,
                goal: rest.trim_start().to_string(),
            };
        }
        if let Some(rest) = instruction.strip_prefix(&markers.ephemeral) {
            return Self {
                triggers: true,
                persist_to_file: false,
                goal: rest.trim_start().to_string(),
            };
        }
        Self {
            triggers: false,
            persist_to_file: false,
            goal: String::new(),
        }
    }
}
