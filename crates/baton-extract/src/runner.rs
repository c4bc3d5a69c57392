//! Real process runner using `tokio::process::Command`.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::traits::{ProcessOutput, ProcessRunner};

/// Real subprocess execution backed by `tokio::process::Command`.
///
/// Invokes the program directly (argv, no shell) with stdin closed and both
/// output streams captured.
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        env: &HashMap<String, String>,
    ) -> std::io::Result<ProcessOutput> {
        let start = Instant::now();

        let mut cmd = tokio::process::Command::new(program);
        let _ = cmd
            .args(args)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        for (key, value) in env {
            let _ = cmd.env(key, value);
        }

        debug!(program, ?args, "spawning extraction process");

        let child = cmd.spawn()?;
        let output = child.wait_with_output().await?;

        let exit_code = output.status.code().unwrap_or(-1);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(program, exit_code, duration_ms, "extraction process completed");

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[tokio::test]
    async fn run_captures_stdout() {
        let runner = TokioProcessRunner;
        let output = runner
            .run("echo", &["hello".to_string()], &no_env())
            .await
            .unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn run_reports_exit_code() {
        let runner = TokioProcessRunner;
        let output = runner
            .run("sh", &["-c".to_string(), "exit 42".to_string()], &no_env())
            .await
            .unwrap();
        assert_eq!(output.exit_code, 42);
    }

    #[tokio::test]
    async fn run_captures_stderr() {
        let runner = TokioProcessRunner;
        let output = runner
            .run("sh", &["-c".to_string(), "echo err >&2".to_string()], &no_env())
            .await
            .unwrap();
        assert_eq!(output.stderr.trim(), "err");
    }

    #[tokio::test]
    async fn run_passes_env() {
        let runner = TokioProcessRunner;
        let mut env = HashMap::new();
        let _ = env.insert("BATON_TEST_VAR".to_string(), "propagated".to_string());
        let output = runner
            .run(
                "sh",
                &["-c".to_string(), "echo $BATON_TEST_VAR".to_string()],
                &env,
            )
            .await
            .unwrap();
        assert_eq!(output.stdout.trim(), "propagated");
    }

    #[tokio::test]
    async fn run_missing_program_is_spawn_error() {
        let runner = TokioProcessRunner;
        let result = runner
            .run("definitely-not-a-real-program-xyz", &[], &no_env())
            .await;
        assert!(result.is_err());
    }
}
