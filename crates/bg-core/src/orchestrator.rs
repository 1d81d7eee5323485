//! Startup pipeline driver: probe, migrate, serve.

use crate::{
    BootError, BootResult, BootState, DependencyTarget, Handoff, Launcher, MigrationResult,
    MigrationRunner, ProbeOutcome, ReadinessProbe, ServerSpec,
};

use log::{debug, info, warn};

/// Final state trail and result of one orchestration run.
#[derive(Debug)]
pub struct BootReport {
    /// Every state entered, in order, starting with `WAITING_FOR_DEPENDENCY`
    pub history: Vec<BootState>,
    pub result: BootResult<Handoff>,
}

impl BootReport {
    pub fn final_state(&self) -> BootState {
        self.history
            .last()
            .copied()
            .unwrap_or(BootState::WaitingForDependency)
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> u8 {
        match self.result {
            Ok(_) => 0,
            Err(ref e) => e.exit_code(),
        }
    }
}

/// Runs the startup pipeline once, fail-fast, with no stage revisited.
///
/// `run` consumes the orchestrator, so a second migration within the
/// same run cannot be expressed. Stages execute strictly one after the
/// other on the caller's task.
pub struct Orchestrator<P, M, L> {
    target: DependencyTarget,
    server: ServerSpec,
    probe: P,
    migrator: M,
    launcher: L,
    history: Vec<BootState>,
}

impl<P, M, L> Orchestrator<P, M, L>
where
    P: ReadinessProbe,
    M: MigrationRunner,
    L: Launcher,
{
    pub fn new(
        target: DependencyTarget,
        server: ServerSpec,
        probe: P,
        migrator: M,
        launcher: L,
    ) -> Self {
        Self {
            target,
            server,
            probe,
            migrator,
            launcher,
            history: vec![BootState::WaitingForDependency],
        }
    }

    pub async fn run(mut self) -> BootReport {
        let result = self.drive().await;

        BootReport {
            history: self.history,
            result,
        }
    }

    async fn drive(&mut self) -> BootResult<Handoff> {
        info!(
            "Waiting for {} (timeout {:?}, {} mode)...",
            self.target,
            self.target.timeout(),
            self.target.mode()
        );
        let outcome = self.probe.await_ready(&self.target).await;
        self.advance(BootState::after_probe(&outcome, self.target.mode()));

        match self.current() {
            BootState::Failed { .. } => {
                return Err(BootError::dependency_unreachable(&self.target, &outcome));
            }
            BootState::Migrating { degraded: true } => {
                warn!(
                    "{} still unreachable after {:?} ({}); continuing in lenient mode",
                    self.target,
                    outcome.elapsed(),
                    Self::last_probe_error(&outcome)
                );
            }
            _ => {}
        }

        info!("Running migrations...");
        let result = self.migrator.apply_migrations().await;
        let next = self.current().after_migration(&result);
        if next != self.current() {
            self.advance(next);
        }

        if let MigrationResult::Failed { reason, exit_code } = result {
            return Err(BootError::migration_failure(reason, exit_code));
        }

        info!("Starting server on {}...", self.server.bind_addr());
        let launched = self.launcher.launch(&self.server);
        self.advance(BootState::after_launch(&launched));

        launched
    }

    fn current(&self) -> BootState {
        self.history
            .last()
            .copied()
            .unwrap_or(BootState::WaitingForDependency)
    }

    fn advance(&mut self, next: BootState) {
        debug!("State: {} -> {}", self.current(), next);
        self.history.push(next);
    }

    fn last_probe_error(outcome: &ProbeOutcome) -> &str {
        match outcome {
            ProbeOutcome::TimedOut {
                last_error: Some(e),
                ..
            } => e,
            _ => "no connection attempt made",
        }
    }
}
