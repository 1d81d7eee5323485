#[cfg(unix)]
mod migration_runner;

use crate::{DependencyTarget, ProbeMode};

use std::time::Duration;

/// Loopback target with test-friendly timings.
pub(crate) fn loopback_target(
    port: u16,
    timeout: Duration,
    mode: ProbeMode,
) -> DependencyTarget {
    DependencyTarget::new("127.0.0.1", port, timeout, mode)
        .unwrap()
        .with_poll_interval(Duration::from_millis(50))
        .unwrap()
        .with_connect_timeout(Duration::from_millis(100))
        .unwrap()
}

/// A port that was free a moment ago and is now closed.
pub(crate) fn released_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
