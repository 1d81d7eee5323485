use crate::{BootError, BootResult};

use std::fmt;
use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// What a probe timeout means for the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMode {
    /// Timeout aborts the orchestration
    Strict,
    /// Timeout is logged and the pipeline continues degraded
    Lenient,
}

impl ProbeMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// A network endpoint that must accept connections before migrating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTarget {
    host: String,
    port: u16,
    timeout: Duration,
    mode: ProbeMode,
    poll_interval: Duration,
    connect_timeout: Duration,
}

impl DependencyTarget {
    pub fn new<S: Into<String>>(
        host: S,
        port: u16,
        timeout: Duration,
        mode: ProbeMode,
    ) -> BootResult<Self> {
        let host = host.into();

        if host.trim().is_empty() {
            return Err(BootError::invalid_target("host must not be empty"));
        }

        if port == 0 {
            return Err(BootError::invalid_target("port must be 1-65535, got 0"));
        }

        if timeout.is_zero() {
            return Err(BootError::invalid_target("timeout must be greater than zero"));
        }

        Ok(Self {
            host,
            port,
            timeout,
            mode,
            poll_interval: DEFAULT_POLL_INTERVAL,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Delay between failed connection attempts.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> BootResult<Self> {
        if poll_interval.is_zero() {
            return Err(BootError::invalid_target(
                "poll interval must be greater than zero",
            ));
        }
        self.poll_interval = poll_interval;
        Ok(self)
    }

    /// Upper bound for one connection attempt.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> BootResult<Self> {
        if connect_timeout.is_zero() {
            return Err(BootError::invalid_target(
                "connect timeout must be greater than zero",
            ));
        }
        self.connect_timeout = connect_timeout;
        Ok(self)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn mode(&self) -> ProbeMode {
        self.mode
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

impl fmt::Display for DependencyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
