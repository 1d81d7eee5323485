//! Dependency readiness polling.

use crate::{DependencyTarget, ProbeOutcome};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use tokio::net::TcpStream;
use tokio::time::Instant;

/// Waits for a dependency to accept connections.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Poll `target` until it is reachable or `target.timeout()` elapses.
    async fn await_ready(&self, target: &DependencyTarget) -> ProbeOutcome;
}

/// Probes with plain TCP connects, like `nc -z`.
///
/// Every attempt opens a fresh connection that is dropped as soon as the
/// handshake completes or fails. Attempts are capped at the time left
/// before the deadline, so the probe never overruns the timeout by more
/// than scheduling jitter and never gives up before the deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

impl TcpProbe {
    pub fn new() -> Self {
        Self
    }

    async fn attempt(host: &str, port: u16, limit: Duration) -> Result<(), String> {
        match tokio::time::timeout(limit, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Ok(())
            }
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!("connection attempt timed out after {limit:?}")),
        }
    }
}

#[async_trait]
impl ReadinessProbe for TcpProbe {
    async fn await_ready(&self, target: &DependencyTarget) -> ProbeOutcome {
        let start = Instant::now();
        let deadline = start + target.timeout();
        let mut attempts = 0u32;
        let mut last_error = None;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return ProbeOutcome::TimedOut {
                    attempts,
                    elapsed: start.elapsed(),
                    last_error,
                };
            }

            attempts += 1;
            let limit = remaining.min(target.connect_timeout());

            match Self::attempt(target.host(), target.port(), limit).await {
                Ok(()) => {
                    let elapsed = start.elapsed();
                    info!("{target} is available after {elapsed:?} ({attempts} attempts)");
                    return ProbeOutcome::Ready { attempts, elapsed };
                }
                Err(e) => {
                    debug!("Attempt {attempts} to reach {target} failed: {e}");
                    last_error = Some(e);
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            tokio::time::sleep(target.poll_interval().min(remaining)).await;
        }
    }
}
