use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_DEPENDENCY_HOST,
    DEFAULT_DEPENDENCY_PORT, DEFAULT_DEPENDENCY_STRICT, DEFAULT_DEPENDENCY_TIMEOUT_SECS,
    DEFAULT_POLL_INTERVAL_MS, DatabaseUrl,
};

use serde::Deserialize;

/// The data store that must accept connections before migrations run.
///
/// `host` and `port` stay `None` unless set explicitly, so a configured
/// database URL can fill them in. Use [`DependencyConfig::endpoint`] to
/// get the effective pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Maximum wait in whole seconds
    pub timeout_secs: u64,
    /// Abort on timeout (true) or continue degraded (false)
    pub strict: bool,
    pub poll_interval_ms: u64,
    /// Upper bound for a single connection attempt
    pub connect_timeout_ms: u64,
    pub database_url: Option<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            timeout_secs: DEFAULT_DEPENDENCY_TIMEOUT_SECS,
            strict: DEFAULT_DEPENDENCY_STRICT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            database_url: None,
        }
    }
}

impl DependencyConfig {
    /// Effective host and port to probe.
    ///
    /// Priority per field: explicit value > database URL > built-in default.
    /// The URL is not read at all when both fields are explicit.
    pub fn endpoint(&self) -> ConfigErrorResult<(String, u16)> {
        if let (Some(host), Some(port)) = (&self.host, self.port) {
            return Ok((host.clone(), port));
        }

        let from_url = match self.database_url.as_deref() {
            Some(raw) => Some(DatabaseUrl::parse(raw)?),
            None => None,
        };

        let host = self
            .host
            .clone()
            .or_else(|| from_url.as_ref().map(|url| url.host.clone()))
            .unwrap_or_else(|| String::from(DEFAULT_DEPENDENCY_HOST));

        let port = self
            .port
            .or_else(|| from_url.as_ref().and_then(|url| url.port))
            .unwrap_or(DEFAULT_DEPENDENCY_PORT);

        Ok((host, port))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let (host, port) = self.endpoint()?;

        if host.trim().is_empty() {
            return Err(ConfigError::dependency("dependency.host must not be empty"));
        }

        if port == 0 {
            return Err(ConfigError::dependency("dependency.port must be 1-65535, got 0"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::dependency(
                "dependency.timeout_secs must be greater than 0",
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::dependency(
                "dependency.poll_interval_ms must be greater than 0",
            ));
        }

        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::dependency(
                "dependency.connect_timeout_ms must be greater than 0",
            ));
        }

        Ok(())
    }
}
