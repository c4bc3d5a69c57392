//! # baton-core
//!
//! Foundation types for the baton handoff pipeline.
//!
//! This crate provides the shared vocabulary that all other baton crates
//! depend on:
//!
//! - **Branded IDs**: [`SessionId`] as a newtype for type safety
//! - **Lifecycle events**: [`PreResetEvent`], [`StartupEvent`] and their
//!   responses, matching the host's camelCase JSON wire format
//! - **Artifact**: [`HandoffArtifact`], the persisted unit that crosses the
//!   reset boundary
//! - **Goal parsing**: [`ParsedGoal`], the pure instruction-text parser

#![deny(unsafe_code)]

pub mod artifact;
pub mod events;
pub mod goal;
pub mod ids;

pub use artifact::HandoffArtifact;
pub use events::{
    PreResetEvent, PreResetResponse, ResetKind, ResetTrigger, StartupEvent, StartupResponse,
    StartupSource,
};
pub use goal::{GoalMarkers, ParsedGoal};
pub use ids::SessionId;

/// Environment variable set on any process the extraction client spawns.
///
/// Lifecycle events dispatched from inside that process inherit it, letting
/// the post-reset handler detect (and refuse) self-triggered re-entry.
pub const REENTRANCY_ENV: &str = "BATON_HANDOFF_IN_FLIGHT";
