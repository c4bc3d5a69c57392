//! Extraction error types.
//!
//! Every variant maps to "skip persistence, allow the reset" in the caller;
//! none of these may propagate as a crash or block the host.

use thiserror::Error;

/// Failure modes of the external extraction call.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The command could not be spawned at all.
    #[error("failed to spawn extraction command '{command}': {source}")]
    Spawn {
        /// The command that was attempted.
        command: String,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The command exited with a non-zero status.
    #[error("extraction command exited with status {code}: {stderr}")]
    NonZeroExit {
        /// Process exit code (-1 when terminated by signal).
        code: i32,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The command succeeded but produced no usable text.
    #[error("extraction command returned empty output")]
    EmptyOutput,

    /// The output contained a known "subject not found" marker.
    #[error("extraction reported subject not found (marker: {marker:?})")]
    SubjectNotFound {
        /// The marker that matched.
        marker: String,
    },
}
