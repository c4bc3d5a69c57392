//! # baton-store
//!
//! Single-slot persisted mailbox for [`HandoffArtifact`]s.
//!
//! The store is the sole mechanism by which state crosses the reset boundary:
//! the pre-reset handler writes exactly one artifact, the post-reset handler
//! reads and conditionally deletes it. At most one artifact exists per
//! working directory; `write` is always create-or-replace, never append.
//!
//! Writes go through a temp file in the target directory followed by an
//! atomic rename, so a concurrent reader can never observe a half-written
//! artifact.

#![deny(unsafe_code)]

mod errors;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use baton_core::HandoffArtifact;
use baton_settings::StoreSettings;

pub use errors::{Result, StoreError};

/// Artifact mailbox scoped to one working directory.
///
/// The artifact lives under the working directory's version-control metadata
/// folder (`.git/<dirName>/<fileName>`), which keeps it out of the user's
/// tree and ties its lifetime to the checkout.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
    file: PathBuf,
}

impl StateStore {
    /// Create a store for the given working directory.
    #[must_use]
    pub fn new(working_directory: &Path, settings: &StoreSettings) -> Self {
        let dir = working_directory.join(".git").join(&settings.dir_name);
        let file = dir.join(&settings.file_name);
        Self { dir, file }
    }

    /// Path of the artifact file. Exposed for diagnostics and tests.
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.file
    }

    /// Persist an artifact, replacing any existing one in full.
    ///
    /// Ensures the containing directory exists (idempotent), serializes to a
    /// temp file in the same directory, then renames it into place. Partial
    /// writes are never visible.
    pub fn write(&self, artifact: &HandoffArtifact) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_vec_pretty(artifact)?;
        let tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        std::fs::write(tmp.path(), &json)?;
        let _ = tmp.persist(&self.file).map_err(|e| e.error)?;

        debug!(path = %self.file.display(), "handoff artifact written");
        Ok(())
    }

    /// Read the pending artifact, if any.
    ///
    /// Returns `None` when no file exists. A malformed or unreadable file is
    /// also reported as `None` (fail-open); the caller must never see a
    /// parse error from a file it did not write in this invocation.
    #[must_use]
    pub fn read(&self) -> Option<HandoffArtifact> {
        let content = match std::fs::read_to_string(&self.file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.file.display(), error = %e, "artifact unreadable, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                warn!(path = %self.file.display(), error = %e, "artifact malformed, treating as absent");
                None
            }
        }
    }

    /// Remove the artifact file and, best-effort, its containing directory.
    ///
    /// Directory removal failure (e.g. unrelated files present) is swallowed.
    /// A missing artifact file is not an error; delete is idempotent.
    pub fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.file) {
            Ok(()) => debug!(path = %self.file.display(), "handoff artifact deleted"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        if let Err(e) = std::fs::remove_dir(&self.dir) {
            debug!(path = %self.dir.display(), error = %e, "left mailbox directory in place");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baton_core::{ResetKind, SessionId};
    use baton_core::events::ResetTrigger;

    fn store_in(dir: &Path) -> StateStore {
        StateStore::new(dir, &StoreSettings::default())
    }

    fn artifact(content: &str) -> HandoffArtifact {
        HandoffArtifact::new(
            SessionId::from("s1"),
            "goal".to_string(),
            content.to_string(),
            ResetTrigger::Manual,
            ResetKind::Compaction,
        )
    }

    #[test]
    fn read_without_write_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(dir.path()).read().is_none());
    }

    #[test]
    fn write_then_read_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.write(&artifact("first")).unwrap();
        let read = store.read().unwrap();
        assert_eq!(read.content, "first");
        assert_eq!(read.goal, "goal");
    }

    #[test]
    fn write_creates_mailbox_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.write(&artifact("x")).unwrap();
        assert!(dir.path().join(".git").join("baton").is_dir());
    }

    #[test]
    fn second_write_replaces_first_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.write(&artifact("first")).unwrap();
        store.write(&artifact("second")).unwrap();

        assert_eq!(store.read().unwrap().content, "second");
        // Exactly one artifact file remains in the mailbox
        let entries: Vec<_> = std::fs::read_dir(store.artifact_path().parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn malformed_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        std::fs::create_dir_all(store.artifact_path().parent().unwrap()).unwrap();
        std::fs::write(store.artifact_path(), "{not json").unwrap();

        assert!(store.read().is_none());
    }

    #[test]
    fn legacy_draft_artifact_still_reads() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        std::fs::create_dir_all(store.artifact_path().parent().unwrap()).unwrap();
        std::fs::write(
            store.artifact_path(),
            r#"{"goal": "g", "draft": "old text", "trigger": "auto",
                "resetKind": "clear", "createdAt": "2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let read = store.read().unwrap();
        assert!(read.is_legacy());
        assert_eq!(read.content, "old text");
    }

    #[test]
    fn delete_removes_file_and_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.write(&artifact("x")).unwrap();

        store.delete().unwrap();
        assert!(!store.artifact_path().exists());
        assert!(!dir.path().join(".git").join("baton").exists());
    }

    #[test]
    fn delete_keeps_directory_with_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.write(&artifact("x")).unwrap();
        std::fs::write(
            store.artifact_path().parent().unwrap().join("other.txt"),
            "unrelated",
        )
        .unwrap();

        store.delete().unwrap();
        assert!(!store.artifact_path().exists());
        assert!(dir.path().join(".git").join("baton").join("other.txt").exists());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.delete().unwrap();
        store.delete().unwrap();
    }
}
