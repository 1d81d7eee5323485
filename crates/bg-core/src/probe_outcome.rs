use std::time::Duration;

/// Result of waiting for a dependency. Produced once per orchestration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A connection succeeded
    Ready { attempts: u32, elapsed: Duration },
    /// The timeout elapsed without a successful connection
    TimedOut {
        attempts: u32,
        elapsed: Duration,
        /// Error from the final attempt, verbatim
        last_error: Option<String>,
    },
}

impl ProbeOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Self::Ready { attempts, .. } | Self::TimedOut { attempts, .. } => *attempts,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Ready { elapsed, .. } | Self::TimedOut { elapsed, .. } => *elapsed,
        }
    }
}
