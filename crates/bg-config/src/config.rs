use crate::{
    CONFIG_PATH_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_FILENAME, DatabaseUrl,
    DependencyConfig, LoggingConfig, MigrationConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dependency: DependencyConfig,
    pub migration: MigrationConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from file and environment.
    ///
    /// Loading order:
    /// 1. Explicit path, else BOOTGATE_CONFIG env var, else ./bootgate.toml
    /// 2. Parse the file if it exists, else use defaults
    ///    (an explicitly named file must exist)
    /// 3. Apply BOOTGATE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after the last override layer.
    pub fn load(explicit: Option<&Path>) -> ConfigErrorResult<Self> {
        let mut config = match Self::config_path(explicit)? {
            Some(path) => Self::load_toml(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Resolve which config file to read, if any.
    /// Priority: explicit path > BOOTGATE_CONFIG > ./bootgate.toml (optional)
    pub fn config_path(explicit: Option<&Path>) -> ConfigErrorResult<Option<PathBuf>> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        if let Some(path) = named {
            if !path.exists() {
                return Err(ConfigError::NotFound { path });
            }
            return Ok(Some(path));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        let implicit = cwd.join(DEFAULT_CONFIG_FILENAME);

        Ok(implicit.exists().then_some(implicit))
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate all configuration.
    /// Call after every override layer has been applied.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.dependency.validate()?;
        self.migration.validate()?;
        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Log configuration summary (never logs the database password).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        match self.dependency.endpoint() {
            Ok((host, port)) => info!(
                "  dependency: {}:{} (timeout {}s, {}, poll {}ms, connect {}ms)",
                host,
                port,
                self.dependency.timeout_secs,
                if self.dependency.strict {
                    "strict"
                } else {
                    "lenient"
                },
                self.dependency.poll_interval_ms,
                self.dependency.connect_timeout_ms
            ),
            Err(e) => info!("  dependency: <unresolved: {e}>"),
        }

        if let Some(ref url) = self.dependency.database_url {
            info!("  database_url: {}", DatabaseUrl::redact(url));
        }

        info!(
            "  migration: {} {}",
            self.migration.program,
            self.migration.args.join(" ")
        );

        info!(
            "  server: {} {} on {} (reload: {}, bind args: {})",
            self.server.program,
            self.server.args.join(" "),
            self.server.bind_addr(),
            self.server.reload,
            self.server.bind_args
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Dependency
        Self::apply_env_option_string("BOOTGATE_DEPENDENCY_HOST", &mut self.dependency.host);
        Self::apply_env_option_parse("BOOTGATE_DEPENDENCY_PORT", &mut self.dependency.port);
        Self::apply_env_parse(
            "BOOTGATE_DEPENDENCY_TIMEOUT_SECS",
            &mut self.dependency.timeout_secs,
        );
        Self::apply_env_bool("BOOTGATE_DEPENDENCY_STRICT", &mut self.dependency.strict);
        Self::apply_env_parse(
            "BOOTGATE_DEPENDENCY_POLL_INTERVAL_MS",
            &mut self.dependency.poll_interval_ms,
        );
        Self::apply_env_parse(
            "BOOTGATE_DEPENDENCY_CONNECT_TIMEOUT_MS",
            &mut self.dependency.connect_timeout_ms,
        );

        // The conventional DATABASE_URL only applies when ours is unset
        if std::env::var("BOOTGATE_DATABASE_URL").is_ok() {
            Self::apply_env_option_string(
                "BOOTGATE_DATABASE_URL",
                &mut self.dependency.database_url,
            );
        } else {
            Self::apply_env_option_string("DATABASE_URL", &mut self.dependency.database_url);
        }

        // Migration
        Self::apply_env_string("BOOTGATE_MIGRATION_PROGRAM", &mut self.migration.program);
        Self::apply_env_list("BOOTGATE_MIGRATION_ARGS", &mut self.migration.args);

        // Server
        Self::apply_env_string("BOOTGATE_SERVER_PROGRAM", &mut self.server.program);
        Self::apply_env_list("BOOTGATE_SERVER_ARGS", &mut self.server.args);
        Self::apply_env_string("BOOTGATE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BOOTGATE_SERVER_PORT", &mut self.server.port);
        Self::apply_env_bool("BOOTGATE_SERVER_RELOAD", &mut self.server.reload);

        // Logging
        Self::apply_env_parse("BOOTGATE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BOOTGATE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BOOTGATE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<T> parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for whitespace-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.split_whitespace().map(String::from).collect();
        }
    }
}
