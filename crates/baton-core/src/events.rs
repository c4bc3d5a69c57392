//! Lifecycle event payloads and responses.
//!
//! These types mirror the host's JSON wire format exactly. All fields use
//! `camelCase` serde renaming. Events arrive on stdin, one JSON object per
//! handler invocation; responses leave on stdout.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Which destructive reset variant an event belongs to.
///
/// Determines which successor startup event is eligible to consume a pending
/// artifact: a `compaction` artifact is only consumed by a `compaction`
/// startup, a `clear` artifact only by a `clear` startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetKind {
    /// Context compaction: the transcript is summarized in place.
    Compaction,
    /// Full clear: the transcript is discarded entirely.
    Clear,
}

impl std::fmt::Display for ResetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compaction => write!(f, "compaction"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// How the reset was initiated.
///
/// Carried through to the injected payload for phrasing only; never consulted
/// for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetTrigger {
    /// The user asked for the reset.
    Manual,
    /// The host triggered the reset on its own (e.g. context pressure).
    Auto,
}

/// Source of a startup event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupSource {
    /// Fresh session launch.
    Startup,
    /// Resumed from a previous transcript.
    Resume,
    /// Successor of a clear.
    Clear,
    /// Successor of a compaction.
    Compaction,
}

impl StartupSource {
    /// The reset kind whose artifact this startup is eligible to consume,
    /// if any. `startup` and `resume` never consume.
    #[must_use]
    pub fn consumes(self) -> Option<ResetKind> {
        match self {
            Self::Compaction => Some(ResetKind::Compaction),
            Self::Clear => Some(ResetKind::Clear),
            Self::Startup | Self::Resume => None,
        }
    }
}

/// Payload of the "about to reset" lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreResetEvent {
    /// Identifier of the outgoing session.
    pub session_id: SessionId,
    /// How the reset was initiated.
    pub trigger: ResetTrigger,
    /// Working directory of the session.
    pub working_directory: String,
    /// Free-form instruction text accompanying the reset request.
    #[serde(default)]
    pub instruction_text: String,
    /// Which reset variant is about to run.
    pub reset_kind: ResetKind,
}

/// Payload of the "new session started" lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupEvent {
    /// Identifier of the successor session.
    pub session_id: SessionId,
    /// Working directory of the session.
    pub working_directory: String,
    /// What produced this startup.
    pub startup_source: StartupSource,
}

/// Response to a pre-reset event.
///
/// `allow_reset` is always `true`; no code path in this pipeline may block
/// the reset it observes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreResetResponse {
    /// Whether the host may proceed with the reset. Always `true`.
    pub allow_reset: bool,
    /// Whether the host should suppress visible handler output.
    pub suppress_visible_output: bool,
}

impl PreResetResponse {
    /// The only response this pipeline ever produces.
    #[must_use]
    pub fn allow() -> Self {
        Self {
            allow_reset: true,
            suppress_visible_output: true,
        }
    }
}

impl Default for PreResetResponse {
    fn default() -> Self {
        Self::allow()
    }
}

/// Response to a startup event.
///
/// Serializes to `{}` when there is nothing to inject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupResponse {
    /// Context to inject into the successor session, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected_context: Option<String>,
}

impl StartupResponse {
    /// No injection, the overwhelmingly common case.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            injected_context: None,
        }
    }

    /// Inject the given payload.
    #[must_use]
    pub fn inject(payload: String) -> Self {
        Self {
            injected_context: Some(payload),
        }
    }

    /// Whether this response carries no injection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.injected_context.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_reset_event_from_wire() {
        let json = r#"{
            "sessionId": "s1",
            "trigger": "manual",
            "workingDirectory": "/work",
            "instructionText": "handoff:finish the parser",
            "resetKind": "compaction"
        }"#;
        let event: PreResetEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.session_id.as_str(), "s1");
        assert_eq!(event.trigger, ResetTrigger::Manual);
        assert_eq!(event.reset_kind, ResetKind::Compaction);
        assert_eq!(event.instruction_text, "handoff:finish the parser");
    }

    #[test]
    fn pre_reset_event_instruction_text_defaults_empty() {
        let json = r#"{
            "sessionId": "s1",
            "trigger": "auto",
            "workingDirectory": "/work",
            "resetKind": "clear"
        }"#;
        let event: PreResetEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.instruction_text, "");
    }

    #[test]
    fn startup_event_from_wire() {
        let json = r#"{
            "sessionId": "s2",
            "workingDirectory": "/work",
            "startupSource": "compaction"
        }"#;
        let event: StartupEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.startup_source, StartupSource::Compaction);
    }

    #[test]
    fn startup_source_consumption_mapping() {
        assert_eq!(
            StartupSource::Compaction.consumes(),
            Some(ResetKind::Compaction)
        );
        assert_eq!(StartupSource::Clear.consumes(), Some(ResetKind::Clear));
        assert_eq!(StartupSource::Startup.consumes(), None);
        assert_eq!(StartupSource::Resume.consumes(), None);
    }

    #[test]
    fn pre_reset_response_always_allows() {
        let response = PreResetResponse::allow();
        assert!(response.allow_reset);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["allowReset"], true);
        assert_eq!(json["suppressVisibleOutput"], true);
    }

    #[test]
    fn empty_startup_response_serializes_to_empty_object() {
        let json = serde_json::to_string(&StartupResponse::empty()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn injecting_startup_response_carries_context() {
        let response = StartupResponse::inject("restored".to_string());
        assert!(!response.is_empty());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["injectedContext"], "restored");
    }

    #[test]
    fn reset_kind_wire_values() {
        assert_eq!(
            serde_json::to_string(&ResetKind::Compaction).unwrap(),
            "\"compaction\""
        );
        assert_eq!(serde_json::to_string(&ResetKind::Clear).unwrap(), "\"clear\"");
    }

    #[test]
    fn reset_kind_display() {
        assert_eq!(ResetKind::Compaction.to_string(), "compaction");
        assert_eq!(ResetKind::Clear.to_string(), "clear");
    }
}
