use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST_FLAG, DEFAULT_PORT_FLAG, DEFAULT_RELOAD_FLAG,
    DEFAULT_SERVER_ARGS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SERVER_PROGRAM,
    DEFAULT_SERVER_RELOAD,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub host: String,
    pub port: u16,
    /// Restart the server when its sources change (development only)
    pub reload: bool,
    /// Append host/port/reload flags to `args`. Disabled when the
    /// command is given verbatim on the command line.
    pub bind_args: bool,
    pub host_flag: String,
    pub port_flag: String,
    pub reload_flag: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: String::from(DEFAULT_SERVER_PROGRAM),
            args: DEFAULT_SERVER_ARGS.iter().map(|s| s.to_string()).collect(),
            host: String::from(DEFAULT_SERVER_HOST),
            port: DEFAULT_SERVER_PORT,
            reload: DEFAULT_SERVER_RELOAD,
            bind_args: true,
            host_flag: String::from(DEFAULT_HOST_FLAG),
            port_flag: String::from(DEFAULT_PORT_FLAG),
            reload_flag: String::from(DEFAULT_RELOAD_FLAG),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::server("server.program must not be empty"));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        // The server binds a fixed, known port; no auto-assign.
        if self.port == 0 {
            return Err(ConfigError::server("server.port must be 1-65535, got 0"));
        }

        if self.bind_args {
            if self.host_flag.trim().is_empty() || self.port_flag.trim().is_empty() {
                return Err(ConfigError::server(
                    "server.host_flag and server.port_flag must not be empty",
                ));
            }

            if self.reload && self.reload_flag.trim().is_empty() {
                return Err(ConfigError::server(
                    "server.reload_flag must not be empty when reload is enabled",
                ));
            }
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
