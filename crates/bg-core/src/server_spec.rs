use crate::{BootError, BootResult};

/// Where and how the application server listens. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    bind_host: String,
    bind_port: u16,
    reload_on_change: bool,
}

impl ServerSpec {
    pub fn new<S: Into<String>>(
        bind_host: S,
        bind_port: u16,
        reload_on_change: bool,
    ) -> BootResult<Self> {
        let bind_host = bind_host.into();

        if bind_host.trim().is_empty() {
            return Err(BootError::invalid_server_spec("bind host must not be empty"));
        }

        if bind_port == 0 {
            return Err(BootError::invalid_server_spec(
                "bind port must be 1-65535, got 0",
            ));
        }

        Ok(Self {
            bind_host,
            bind_port,
            reload_on_change,
        })
    }

    pub fn bind_host(&self) -> &str {
        &self.bind_host
    }

    pub fn bind_port(&self) -> u16 {
        self.bind_port
    }

    pub fn reload_on_change(&self) -> bool {
        self.reload_on_change
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}
