//! # baton-hooks
//!
//! The two halves of the handoff state machine.
//!
//! [`PreResetHandler`] runs on the "about to reset" event: it parses the
//! instruction text for a goal marker, extracts goal-relevant context from
//! the outgoing session, and parks the result in the artifact mailbox.
//! It never blocks or fails the reset it observes.
//!
//! [`PostResetHandler`] runs on the "new session started" event: it decides
//! whether a pending artifact is consumable, injects it, and deletes it only
//! after the injection payload has been constructed. A crash in between
//! leaves the artifact intact for retry.
//!
//! # Fail-Open
//!
//! No failure in either handler may ever reach the host. Every path ends in
//! a well-formed response; failures are observable only through the absence
//! of injected context and through diagnostic logs.

#![deny(unsafe_code)]

mod guard;
mod payload;
mod post_reset;
mod pre_reset;

pub use guard::ReentrancyGuard;
pub use payload::frame_injection;
pub use post_reset::PostResetHandler;
pub use pre_reset::PreResetHandler;
