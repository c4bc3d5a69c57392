//! Store error types.

use thiserror::Error;

/// Errors that can occur while writing the artifact mailbox.
///
/// Read-side problems are deliberately not represented here: a missing or
/// malformed artifact file is treated as "absent" by [`crate::StateStore::read`]
/// rather than surfaced as an error (fail-open).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    /// Artifact serialization failed.
    #[error("artifact serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
