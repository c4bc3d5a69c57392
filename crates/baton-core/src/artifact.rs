//! The persisted handoff artifact.
//!
//! At most one artifact exists per working directory at any time. It is
//! created by the pre-reset handler, survives the reset boundary on disk, and
//! is read and conditionally destroyed by the post-reset handler. The only
//! transition out of *pending* is deletion; there is no "consumed but
//! retained" state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{ResetKind, ResetTrigger};
use crate::ids::SessionId;

/// The handoff payload that crosses the reset boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffArtifact {
    /// Identifier of the session that was reset.
    ///
    /// Absent only in artifacts written by the legacy format; such artifacts
    /// are discarded immediately on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_session_id: Option<SessionId>,
    /// User-declared intent driving extraction. May be empty.
    #[serde(default)]
    pub goal: String,
    /// The extracted handoff text. Empty content is a terminal failure
    /// signal and is never injected. Legacy artifacts used the key `draft`.
    #[serde(alias = "draft", default)]
    pub content: String,
    /// How the reset was initiated. Phrasing only, never control flow.
    pub trigger: ResetTrigger,
    /// Which reset variant produced this artifact.
    pub reset_kind: ResetKind,
    /// Advisory creation timestamp. Not used for expiry.
    pub created_at: DateTime<Utc>,
    /// Number of failed consumption attempts so far.
    #[serde(default)]
    pub attempts: u32,
}

impl HandoffArtifact {
    /// Build a fresh artifact at reset-trigger time.
    #[must_use]
    pub fn new(
        prior_session_id: SessionId,
        goal: String,
        content: String,
        trigger: ResetTrigger,
        reset_kind: ResetKind,
    ) -> Self {
        Self {
            prior_session_id: Some(prior_session_id),
            goal,
            content,
            trigger,
            reset_kind,
            created_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Whether this artifact predates the `priorSessionId` field.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.prior_session_id.is_none()
    }

    /// A copy with the attempt counter advanced by one.
    #[must_use]
    pub fn with_failed_attempt(&self) -> Self {
        Self {
            attempts: self.attempts.saturating_add(1),
            ..self.clone()
        }
    }
}
