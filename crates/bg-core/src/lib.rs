//! Bootstrap & readiness orchestration: wait for a data store, migrate
//! its schema once, then hand the process over to the application server.

mod boot_state;
mod dependency_target;
pub mod error;
mod launcher;
mod migration_result;
mod migration_runner;
mod orchestrator;
mod probe_outcome;
mod readiness_probe;
mod server_command;
mod server_spec;

#[cfg(test)]
mod tests;

pub use boot_state::{BootState, FailedStage};
pub use dependency_target::{DependencyTarget, ProbeMode};
pub use error::{BootError, Result as BootResult};
pub use launcher::{ExecLauncher, Handoff, Launcher};
pub use migration_result::MigrationResult;
pub use migration_runner::{CommandMigrationRunner, MigrationRunner};
pub use orchestrator::{BootReport, Orchestrator};
pub use probe_outcome::ProbeOutcome;
pub use readiness_probe::{ReadinessProbe, TcpProbe};
pub use server_command::ServerCommand;
pub use server_spec::ServerSpec;
