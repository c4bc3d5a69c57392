//! DI abstraction for subprocess execution.
//!
//! The extraction client talks to the external summarizer through
//! [`ProcessRunner`] so tests can substitute a fake without spawning
//! anything.

use std::collections::HashMap;

use async_trait::async_trait;

/// Captured result of a completed subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit code (-1 when terminated by signal).
    pub exit_code: i32,
}

/// Runs an external command to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Execute `program` with `args` and extra environment variables,
    /// waiting for it to exit. No timeout is applied here.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        env: &HashMap<String, String>,
    ) -> std::io::Result<ProcessOutput>;
}
