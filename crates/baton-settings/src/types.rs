//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` to match the host's
//! JSON wire format. Each type implements [`Default`] with production default
//! values, and `#[serde(default)]` allows partial JSON; missing fields get
//! their default during deserialization.

use baton_core::goal::GoalMarkers;
use serde::{Deserialize, Serialize};

/// Root settings type for the baton pipeline.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "extraction": { "model": "haiku" },
///   "retry": { "maxAttempts": 5 }
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatonSettings {
    /// External summarizer invocation settings.
    pub extraction: ExtractionSettings,
    /// Goal marker strings recognized by the parser.
    pub markers: GoalMarkers,
    /// Artifact mailbox location settings.
    pub store: StoreSettings,
    /// Consumption retry policy.
    pub retry: RetrySettings,
}

/// Settings for invoking the external summarization service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionSettings {
    /// Command to invoke.
    pub command: String,
    /// Model/speed tier selector passed to the command. A fast tier keeps
    /// the one blocking call in the pipeline cheap.
    pub model: String,
    /// Substrings that mark a "subject not found" failure in the output.
    /// Matched case-insensitively against the full output.
    pub failure_markers: Vec<String>,
    /// Word cap the prompt asks the service to respect. Enforced by
    /// instruction, not by local truncation.
    pub prompt_word_cap: u32,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            command: "claude".to_string(),
            model: "haiku".to_string(),
            failure_markers: vec!["no conversation found".to_string()],
            prompt_word_cap: 450,
        }
    }
}

/// Settings for the artifact mailbox under the version-control metadata
/// folder.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Directory name under `.git/`.
    pub dir_name: String,
    /// Artifact file name.
    pub file_name: String,
    /// File name for the persist-to-file side channel, written to the
    /// working directory root.
    pub side_channel_file: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            dir_name: "baton".to_string(),
            file_name: "handoff.json".to_string(),
            side_channel_file: "HANDOFF.md".to_string(),
        }
    }
}

/// Consumption retry policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrySettings {
    /// Maximum failed consumption attempts before a pending artifact is
    /// dropped instead of retained.
    pub max_attempts: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}
