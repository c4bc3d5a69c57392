//! Process-boundary re-entrancy guard.
//!
//! The extraction client sets [`baton_core::REENTRANCY_ENV`] on the
//! summarizer process it spawns. If that process's own instrumentation
//! re-dispatches a lifecycle event, the handler invoked for it inherits the
//! variable and must exit immediately with no output. The guard reads an
//! injected snapshot value so tests never touch the real environment.

use baton_core::REENTRANCY_ENV;

/// Snapshot of the re-entrancy flag at handler startup.
#[derive(Debug, Clone, Copy)]
pub struct ReentrancyGuard {
    active: bool,
}

impl ReentrancyGuard {
    /// Read the flag from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let active = std::env::var(REENTRANCY_ENV).is_ok_and(|v| !v.is_empty());
        Self { active }
    }

    /// A guard that is not tripped (normal dispatch).
    #[must_use]
    pub fn clear() -> Self {
        Self { active: false }
    }

    /// A guard that is tripped (self-triggered dispatch).
    #[must_use]
    pub fn tripped() -> Self {
        Self { active: true }
    }

    /// Whether this invocation originated from inside the pipeline's own
    /// extraction flow.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }
}
