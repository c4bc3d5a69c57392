//! The post-reset handler.
//!
//! Single pass per invocation. The overwhelmingly common case, no pending
//! artifact, is a single failed `open()` and must add negligible latency.
//!
//! Deletion ordering is the correctness core: the artifact is removed only
//! after the injection payload has been constructed, so a crash anywhere
//! before that point leaves the artifact pending for retry. A mismatched
//! startup source retains the artifact untouched; a qualifying startup that
//! cannot inject advances the attempt counter and drops the artifact once
//! the configured ceiling is reached.

use std::path::Path;

use tracing::{debug, warn};

use baton_core::{HandoffArtifact, StartupEvent, StartupResponse};
use baton_settings::BatonSettings;
use baton_store::StateStore;

use crate::guard::ReentrancyGuard;
use crate::payload::frame_injection;

/// Orchestrates artifact consumption in response to the "new session
/// started" event.
pub struct PostResetHandler {
    settings: BatonSettings,
}

impl PostResetHandler {
    /// Build a handler.
    #[must_use]
    pub fn new(settings: BatonSettings) -> Self {
        Self { settings }
    }

    /// Handle a startup event. Infallible: every path returns a response,
    /// empty in all but the successful-injection case.
    pub fn handle(&self, event: &StartupEvent, guard: ReentrancyGuard) -> StartupResponse {
        if guard.is_active() {
            debug!(session = %event.session_id, "re-entrant dispatch, ignoring");
            return StartupResponse::empty();
        }

        let Some(expected_kind) = event.startup_source.consumes() else {
            return StartupResponse::empty();
        };

        let store = StateStore::new(Path::new(&event.working_directory), &self.settings.store);
        let Some(artifact) = store.read() else {
            return StartupResponse::empty();
        };

        if artifact.is_legacy() {
            // A legacy artifact has no prior session ID and can never become
            // valid; retaining it would only leak across future sessions.
            warn!("discarding legacy handoff artifact without prior session id");
            self.delete_artifact(&store);
            return StartupResponse::empty();
        }

        if artifact.reset_kind != expected_kind {
            // Not ours to consume; a startup of the matching kind may still
            // arrive later. Leave the artifact untouched.
            debug!(
                artifact_kind = %artifact.reset_kind,
                startup_kind = %expected_kind,
                "reset kind mismatch, retaining artifact"
            );
            return StartupResponse::empty();
        }

        if artifact.content.is_empty() {
            warn!("pending artifact has empty content, not injectable");
            self.record_failed_attempt(&store, &artifact);
            return StartupResponse::empty();
        }

        self.check_identifier_anomalies(event, &artifact);

        let payload = frame_injection(&artifact);

        // Delete only after the response payload exists; a crash between the
        // read and this point must leave the artifact pending.
        self.delete_artifact(&store);

        debug!(
            session = %event.session_id,
            goal = %artifact.goal,
            "handoff injected into successor session"
        );
        StartupResponse::inject(payload)
    }

    /// Warn on identifier anomalies without altering control flow.
    fn check_identifier_anomalies(&self, event: &StartupEvent, artifact: &HandoffArtifact) {
        let Some(prior) = &artifact.prior_session_id else {
            return;
        };
        if prior == &event.session_id {
            warn!(
                session = %event.session_id,
                "successor session id equals prior session id (upstream allocation bug?)"
            );
        }
        if !prior.is_well_formed() {
            warn!(prior = %prior, "prior session id is not a well-formed identifier");
        }
    }

    /// Advance the attempt counter, dropping the artifact at the ceiling.
    fn record_failed_attempt(&self, store: &StateStore, artifact: &HandoffArtifact) {
        let retried = artifact.with_failed_attempt();
        if retried.attempts >= self.settings.retry.max_attempts {
            warn!(
                attempts = retried.attempts,
                "handoff artifact exhausted its retries, dropping"
            );
            self.delete_artifact(store);
        } else if let Err(e) = store.write(&retried) {
            warn!(error = %e, "failed to record handoff attempt");
        }
    }

    fn delete_artifact(&self, store: &StateStore) {
        if let Err(e) = store.delete() {
            warn!(error = %e, "failed to delete handoff artifact");
        }
    }
}
