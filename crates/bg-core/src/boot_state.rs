//! Orchestration states and their transition functions.
//!
//! The machine is strictly linear:
//!
//! ```text
//! WAITING_FOR_DEPENDENCY -> MIGRATING -> SERVING
//!          |                   |
//!          +-------------------+--> FAILED
//! ```
//!
//! A lenient probe timeout still moves to `MIGRATING`, flagged degraded.
//! The machine stays in `MIGRATING` until the launcher hands off, so a
//! server that cannot be started fails from there and `SERVING` is never
//! left once entered.
//! Transitions are pure functions of the stage result so the policy can
//! be checked without a network or a migration tool.

use crate::{BootResult, MigrationResult, ProbeMode, ProbeOutcome};

use std::fmt;

/// Stage that moved the machine to `FAILED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStage {
    Dependency,
    Migration,
    Launch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    WaitingForDependency,
    /// `degraded` is set when a lenient probe timed out
    Migrating { degraded: bool },
    /// Control has passed to the server; entered only after a successful hand-off
    Serving,
    Failed { stage: FailedStage },
}

impl BootState {
    /// Transition out of `WAITING_FOR_DEPENDENCY`.
    pub fn after_probe(outcome: &ProbeOutcome, mode: ProbeMode) -> Self {
        match (outcome, mode) {
            (ProbeOutcome::Ready { .. }, _) => Self::Migrating { degraded: false },
            (ProbeOutcome::TimedOut { .. }, ProbeMode::Strict) => Self::Failed {
                stage: FailedStage::Dependency,
            },
            (ProbeOutcome::TimedOut { .. }, ProbeMode::Lenient) => {
                Self::Migrating { degraded: true }
            }
        }
    }

    /// State after the migration step. Success keeps `self` until the
    /// server has been handed control.
    pub fn after_migration(self, result: &MigrationResult) -> Self {
        match result {
            MigrationResult::Applied => self,
            MigrationResult::Failed { .. } => Self::Failed {
                stage: FailedStage::Migration,
            },
        }
    }

    /// Transition out of `MIGRATING` once the launcher has returned.
    pub fn after_launch<T>(result: &BootResult<T>) -> Self {
        match result {
            Ok(_) => Self::Serving,
            Err(_) => Self::Failed {
                stage: FailedStage::Launch,
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Serving | Self::Failed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WaitingForDependency => "WAITING_FOR_DEPENDENCY",
            Self::Migrating { .. } => "MIGRATING",
            Self::Serving => "SERVING",
            Self::Failed { .. } => "FAILED",
        }
    }
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Migrating { degraded: true } => write!(f, "{} (degraded)", self.name()),
            Self::Failed { stage } => write!(f, "{} ({stage:?})", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}
