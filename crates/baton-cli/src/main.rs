//! # baton
//!
//! Lifecycle-event CLI for the baton handoff pipeline. The host invokes one
//! subcommand per event, passing the event payload as JSON on stdin; the
//! response is written as JSON to stdout.
//!
//! The process always exits 0. A handler that cannot do its work logs to
//! stderr and emits the default response for its event; the host must never
//! see a failure from this binary.

#![deny(unsafe_code)]

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use baton_core::{PreResetEvent, PreResetResponse, StartupEvent, StartupResponse};
use baton_extract::TokioProcessRunner;
use baton_hooks::{PostResetHandler, PreResetHandler, ReentrancyGuard};
use baton_settings::BatonSettings;

/// Baton handoff pipeline.
#[derive(Parser, Debug)]
#[command(name = "baton", about = "Goal-directed context handoff across session resets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// One subcommand per lifecycle event.
#[derive(Subcommand, Debug)]
enum Command {
    /// Handle the "about to reset" lifecycle event.
    PreReset,
    /// Handle the "new session started" lifecycle event.
    SessionStart,
}

/// Logging goes to stderr only; stdout is reserved for the response JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_env("BATON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    let _ = std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read event payload from stdin")?;
    Ok(input)
}

fn load_settings() -> BatonSettings {
    match baton_settings::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "settings unreadable, using defaults");
            BatonSettings::default()
        }
    }
}

async fn run_pre_reset(
    input: &str,
    settings: BatonSettings,
    guard: ReentrancyGuard,
) -> PreResetResponse {
    if guard.is_active() {
        tracing::debug!("re-entrant dispatch, allowing reset without handoff");
        return PreResetResponse::allow();
    }
    let event: PreResetEvent = match serde_json::from_str(input) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "malformed pre-reset event, allowing reset");
            return PreResetResponse::allow();
        }
    };
    let handler = PreResetHandler::new(Arc::new(TokioProcessRunner), settings);
    handler.handle(&event).await
}

fn run_session_start(
    input: &str,
    settings: BatonSettings,
    guard: ReentrancyGuard,
) -> StartupResponse {
    let event: StartupEvent = match serde_json::from_str(input) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "malformed startup event, nothing to inject");
            return StartupResponse::empty();
        }
    };
    PostResetHandler::new(settings).handle(&event, guard)
}

fn emit<T: serde::Serialize>(response: &T) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize response");
            println!("{{}}");
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Cli::parse();

    // The guard snapshot must be taken before anything else mutates the
    // environment of this process.
    let guard = ReentrancyGuard::from_env();

    let input = read_stdin().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "treating stdin as empty");
        String::new()
    });
    let settings = load_settings();

    match args.command {
        Command::PreReset => emit(&run_pre_reset(&input, settings, guard).await),
        Command::SessionStart => emit(&run_session_start(&input, settings, guard)),
    }
}
