use std::panic::Location;
use std::path::PathBuf;

use bg_core::error::EXIT_USAGE;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntrypointError {
    #[error("Config error: {0}")]
    Config(#[from] bg_config::ConfigError),

    #[error(transparent)]
    Boot(#[from] bg_core::BootError),

    #[error("Failed to open log file {path}: {source} {location}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl EntrypointError {
    #[track_caller]
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_USAGE,
            Self::Boot(e) => e.exit_code(),
            Self::LogFile { .. } | Self::Logger { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EntrypointError>;
