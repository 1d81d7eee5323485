use crate::{DependencyTarget, ProbeOutcome};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Exit status for invalid orchestration inputs (usage error).
pub const EXIT_USAGE: u8 = 2;
/// Exit status when the dependency never became reachable.
pub const EXIT_TIMED_OUT: u8 = 124;
/// Exit status when a program exists but cannot be executed.
pub const EXIT_CANNOT_EXECUTE: u8 = 126;
/// Exit status when a program cannot be found.
pub const EXIT_NOT_FOUND: u8 = 127;

#[derive(Error, Debug)]
pub enum BootError {
    #[error("Invalid dependency target: {message} {location}")]
    InvalidTarget {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid server spec: {message} {location}")]
    InvalidServerSpec {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Dependency {host}:{port} unreachable after {timeout:?} ({attempts} attempts): {last_error} {location}"
    )]
    DependencyUnreachable {
        host: String,
        port: u16,
        timeout: Duration,
        attempts: u32,
        last_error: String,
        location: ErrorLocation,
    },

    #[error("Migration failed: {reason} {location}")]
    MigrationFailure {
        reason: String,
        exit_code: Option<i32>,
        location: ErrorLocation,
    },

    #[error("Failed to launch server `{program}`: {source} {location}")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl BootError {
    #[track_caller]
    pub fn invalid_target<S: Into<String>>(message: S) -> Self {
        Self::InvalidTarget {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_server_spec<S: Into<String>>(message: S) -> Self {
        Self::InvalidServerSpec {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dependency_unreachable(target: &DependencyTarget, outcome: &ProbeOutcome) -> Self {
        let (attempts, last_error) = match outcome {
            ProbeOutcome::TimedOut {
                attempts,
                last_error,
                ..
            } => (*attempts, last_error.clone()),
            ProbeOutcome::Ready { attempts, .. } => (*attempts, None),
        };

        Self::DependencyUnreachable {
            host: target.host().to_string(),
            port: target.port(),
            timeout: target.timeout(),
            attempts,
            last_error: last_error.unwrap_or_else(|| String::from("no connection attempt made")),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn migration_failure<S: Into<String>>(reason: S, exit_code: Option<i32>) -> Self {
        Self::MigrationFailure {
            reason: reason.into(),
            exit_code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn launch_failure<S: Into<String>>(program: S, source: std::io::Error) -> Self {
        Self::LaunchFailure {
            program: program.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit status for this failure.
    ///
    /// Migration failures propagate the tool's own status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidTarget { .. } | Self::InvalidServerSpec { .. } => EXIT_USAGE,
            Self::DependencyUnreachable { .. } => EXIT_TIMED_OUT,
            Self::MigrationFailure { exit_code, .. } => match exit_code {
                Some(code) if (1..=255).contains(code) => *code as u8,
                _ => 1,
            },
            Self::LaunchFailure { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                _ => EXIT_CANNOT_EXECUTE,
            },
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidTarget { .. } => {
                "Check the dependency host, port and timeout settings. \
                   The port must be 1-65535 and the timeout greater than zero."
            }
            Self::InvalidServerSpec { .. } => {
                "Check the server bind host and port settings."
            }
            Self::DependencyUnreachable { .. } => {
                "The data store did not accept connections in time. \
                   Check that it is running and reachable, or raise the timeout."
            }
            Self::MigrationFailure { .. } => {
                "The migration tool reported an error. \
                   Fix the schema problem shown above before restarting; migrations are not retried."
            }
            Self::LaunchFailure { .. } => {
                "The server program could not be started. \
                   Check that it is installed and on PATH."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BootError>;
