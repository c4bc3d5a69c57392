//! The pre-reset handler.
//!
//! Single pass per invocation, no persisted state of its own. The reset
//! always proceeds regardless of what happens here: there is no code path
//! that signals "block the reset", and the no-handoff path does no IO at all.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use baton_core::{HandoffArtifact, ParsedGoal, PreResetEvent, PreResetResponse};
use baton_extract::{ExtractionClient, ProcessRunner};
use baton_settings::BatonSettings;
use baton_store::StateStore;

/// Orchestrates goal parsing, extraction, and artifact persistence in
/// response to the "about to reset" event.
pub struct PreResetHandler {
    client: ExtractionClient,
    settings: BatonSettings,
}

impl PreResetHandler {
    /// Build a handler around the given process runner.
    #[must_use]
    pub fn new(runner: Arc<dyn ProcessRunner>, settings: BatonSettings) -> Self {
        let client = ExtractionClient::new(runner, settings.extraction.clone());
        Self { client, settings }
    }

    /// Handle a pre-reset event. Infallible: always returns "allow reset".
    pub async fn handle(&self, event: &PreResetEvent) -> PreResetResponse {
        let parsed = ParsedGoal::parse(&event.instruction_text, &self.settings.markers);
        if !parsed.triggers {
            // Indistinguishable from the pipeline not existing at all.
            return PreResetResponse::allow();
        }

        debug!(
            session = %event.session_id,
            reset_kind = %event.reset_kind,
            persist_to_file = parsed.persist_to_file,
            "handoff requested"
        );

        let content = match self.client.extract(&event.session_id, &parsed.goal).await {
            Ok(content) => content,
            Err(e) => {
                // Degrade gracefully: no artifact, reset proceeds.
                warn!(session = %event.session_id, error = %e, "extraction failed, skipping handoff");
                return PreResetResponse::allow();
            }
        };

        let working_directory = Path::new(&event.working_directory);
        let artifact = HandoffArtifact::new(
            event.session_id.clone(),
            parsed.goal,
            content,
            event.trigger,
            event.reset_kind,
        );

        let store = StateStore::new(working_directory, &self.settings.store);
        if let Err(e) = store.write(&artifact) {
            warn!(error = %e, "failed to persist handoff artifact");
        } else if parsed.persist_to_file {
            self.write_side_channel(working_directory, &artifact.content);
        }

        PreResetResponse::allow()
    }

    /// Best-effort raw-content emission for the persist-to-file variant.
    /// Failure here must not affect the artifact write or the reset response.
    fn write_side_channel(&self, working_directory: &Path, content: &str) {
        let path = working_directory.join(&self.settings.store.side_channel_file);
        if let Err(e) = std::fs::write(&path, content) {
            warn!(path = %path.display(), error = %e, "failed to write side-channel file");
        } else {
            debug!(path = %path.display(), "side-channel file written");
        }
    }
}
