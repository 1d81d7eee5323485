//! Fake pipeline stages that record what the orchestrator asked of them.

#![allow(dead_code)]

use bg_core::{
    BootError, BootResult, DependencyTarget, Handoff, Launcher, MigrationResult, MigrationRunner,
    ProbeMode, ProbeOutcome, ReadinessProbe, ServerSpec,
};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// Shared, ordered record of stage invocations.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<&'static str>>>);

impl EventLog {
    pub fn push(&self, event: &'static str) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        self.events().iter().filter(|e| **e == event).count()
    }
}

/// Probe that answers immediately with a fixed outcome.
pub struct FixedProbe {
    outcome: ProbeOutcome,
    log: EventLog,
}

impl FixedProbe {
    pub fn ready(log: &EventLog) -> Self {
        Self {
            outcome: ProbeOutcome::Ready {
                attempts: 1,
                elapsed: Duration::ZERO,
            },
            log: log.clone(),
        }
    }

    pub fn timed_out(log: &EventLog) -> Self {
        Self {
            outcome: ProbeOutcome::TimedOut {
                attempts: 5,
                elapsed: Duration::from_secs(5),
                last_error: Some(String::from("Connection refused (os error 111)")),
            },
            log: log.clone(),
        }
    }
}

#[async_trait]
impl ReadinessProbe for FixedProbe {
    async fn await_ready(&self, _target: &DependencyTarget) -> ProbeOutcome {
        self.log.push("probe");
        self.outcome.clone()
    }
}

/// Migrator that returns a scripted result.
pub struct ScriptedMigrator {
    result: MigrationResult,
    log: EventLog,
}

impl ScriptedMigrator {
    pub fn applied(log: &EventLog) -> Self {
        Self {
            result: MigrationResult::Applied,
            log: log.clone(),
        }
    }

    pub fn failing(log: &EventLog, reason: &str, exit_code: i32) -> Self {
        Self {
            result: MigrationResult::Failed {
                reason: reason.to_string(),
                exit_code: Some(exit_code),
            },
            log: log.clone(),
        }
    }
}

#[async_trait]
impl MigrationRunner for ScriptedMigrator {
    async fn apply_migrations(&self) -> MigrationResult {
        self.log.push("migrate");
        self.result.clone()
    }
}

/// Launcher that records the server settings instead of replacing the process.
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<ServerSpec>>>,
    fail_with: Option<std::io::ErrorKind>,
    log: EventLog,
}

impl RecordingLauncher {
    pub fn new(log: &EventLog) -> Self {
        Self {
            launched: Arc::default(),
            fail_with: None,
            log: log.clone(),
        }
    }

    pub fn failing(log: &EventLog, kind: std::io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::new(log)
        }
    }

    pub fn launched(&self) -> Arc<Mutex<Vec<ServerSpec>>> {
        Arc::clone(&self.launched)
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, spec: &ServerSpec) -> BootResult<Handoff> {
        self.log.push("launch");
        self.launched.lock().unwrap().push(spec.clone());

        match self.fail_with {
            Some(kind) => Err(BootError::launch_failure(
                "uvicorn",
                std::io::Error::new(kind, "launch refused"),
            )),
            None => Ok(Handoff {
                argv: vec![String::from("uvicorn"), spec.bind_addr()],
            }),
        }
    }
}

pub fn target(mode: ProbeMode) -> DependencyTarget {
    DependencyTarget::new("db", 5432, Duration::from_secs(5), mode).unwrap()
}

pub fn server_spec() -> ServerSpec {
    ServerSpec::new("0.0.0.0", 8000, false).unwrap()
}
