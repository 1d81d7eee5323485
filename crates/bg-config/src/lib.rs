mod config;
mod database_url;
mod dependency_config;
mod error;
mod log_level;
mod logging_config;
mod migration_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_url::DatabaseUrl;
pub use dependency_config::DependencyConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use migration_config::MigrationConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "BOOTGATE_CONFIG";
/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILENAME: &str = "bootgate.toml";

const DEFAULT_DEPENDENCY_HOST: &str = "db";
const DEFAULT_DEPENDENCY_PORT: u16 = 5432;
const DEFAULT_DEPENDENCY_TIMEOUT_SECS: u64 = 15;
const DEFAULT_DEPENDENCY_STRICT: bool = true;
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1000;

const DEFAULT_MIGRATION_PROGRAM: &str = "alembic";
const DEFAULT_MIGRATION_ARGS: &[&str] = &["upgrade", "head"];

const DEFAULT_SERVER_PROGRAM: &str = "uvicorn";
const DEFAULT_SERVER_ARGS: &[&str] = &["main:app"];
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_SERVER_RELOAD: bool = false;
const DEFAULT_HOST_FLAG: &str = "--host";
const DEFAULT_PORT_FLAG: &str = "--port";
const DEFAULT_RELOAD_FLAG: &str = "--reload";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
