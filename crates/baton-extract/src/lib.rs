//! # baton-extract
//!
//! Context extraction client. Wraps the one blocking external call in the
//! whole pipeline.
//!
//! The client invokes an external summarization command against a forked,
//! non-destructive read of the prior session and returns the extracted text,
//! or a classified [`ExtractError`]. It never persists anything; graceful
//! degradation on failure is the caller's job.
//!
//! There is deliberately no local timeout on the call: timeout policy belongs
//! to the external collaborator. If the command hangs, the handler hangs with
//! it (documented risk).

#![deny(unsafe_code)]

mod client;
mod errors;
mod heuristic;
mod prompt;
mod runner;
mod traits;

pub use client::ExtractionClient;
pub use errors::ExtractError;
pub use heuristic::{FailureHeuristic, MarkerHeuristic};
pub use prompt::build_extraction_prompt;
pub use runner::TokioProcessRunner;
pub use traits::{ProcessOutput, ProcessRunner};
