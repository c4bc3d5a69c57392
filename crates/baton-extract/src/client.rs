//! The extraction client.
//!
//! Builds the prompt, invokes the external summarizer against a forked,
//! read-only view of the prior session, and classifies the outcome. The
//! spawned process (and anything it dispatches) inherits the re-entrancy
//! environment variable so self-triggered lifecycle events can be detected
//! downstream.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use baton_core::{REENTRANCY_ENV, SessionId};
use baton_settings::ExtractionSettings;

use crate::errors::ExtractError;
use crate::heuristic::{FailureHeuristic, MarkerHeuristic};
use crate::prompt::build_extraction_prompt;
use crate::traits::ProcessRunner;

/// Client for the external context-summarization service.
pub struct ExtractionClient {
    runner: Arc<dyn ProcessRunner>,
    heuristic: Box<dyn FailureHeuristic>,
    settings: ExtractionSettings,
}

impl ExtractionClient {
    /// Build a client with the default marker heuristic from settings.
    #[must_use]
    pub fn new(runner: Arc<dyn ProcessRunner>, settings: ExtractionSettings) -> Self {
        let heuristic = Box::new(MarkerHeuristic::new(settings.failure_markers.clone()));
        Self {
            runner,
            heuristic,
            settings,
        }
    }

    /// Build a client with a custom failure heuristic.
    #[must_use]
    pub fn with_heuristic(
        runner: Arc<dyn ProcessRunner>,
        settings: ExtractionSettings,
        heuristic: Box<dyn FailureHeuristic>,
    ) -> Self {
        Self {
            runner,
            heuristic,
            settings,
        }
    }

    /// Extract goal-relevant context from the prior session.
    ///
    /// The invocation is a non-destructive fork of the prior session: the
    /// original transcript is never mutated or consumed. The call is
    /// synchronous from the handler's point of view and carries no local
    /// timeout.
    pub async fn extract(
        &self,
        prior_session_id: &SessionId,
        goal: &str,
    ) -> Result<String, ExtractError> {
        let prompt = build_extraction_prompt(goal, self.settings.prompt_word_cap);
        let args = vec![
            "--resume".to_string(),
            prior_session_id.to_string(),
            "--fork-session".to_string(),
            "--model".to_string(),
            self.settings.model.clone(),
            "-p".to_string(),
            prompt,
        ];

        let mut env = HashMap::new();
        let _ = env.insert(REENTRANCY_ENV.to_string(), "1".to_string());

        debug!(
            session = %prior_session_id,
            model = %self.settings.model,
            "invoking extraction command"
        );

        let output = self
            .runner
            .run(&self.settings.command, &args, &env)
            .await
            .map_err(|source| ExtractError::Spawn {
                command: self.settings.command.clone(),
                source,
            })?;

        if output.exit_code != 0 {
            warn!(
                exit_code = output.exit_code,
                "extraction command failed"
            );
            return Err(ExtractError::NonZeroExit {
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let text = output.stdout.trim();
        if text.is_empty() {
            return Err(ExtractError::EmptyOutput);
        }

        if let Some(marker) = self.heuristic.detect(&output.stdout) {
            return Err(ExtractError::SubjectNotFound { marker });
        }

        Ok(text.to_string())
    }
}
