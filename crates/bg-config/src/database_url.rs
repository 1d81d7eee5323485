//! Probe endpoint derivation from connection URLs such as
//! `postgresql+psycopg2://user:secret@db:5432/app`.

use crate::{ConfigError, ConfigErrorResult};

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    /// Scheme without any `+driver` suffix
    pub scheme: String,
    pub host: String,
    /// Explicit port, or the scheme's well-known port
    pub port: Option<u16>,
}

impl DatabaseUrl {
    pub fn parse(raw: &str) -> ConfigErrorResult<Self> {
        let url = Url::parse(raw).map_err(|source| ConfigError::DatabaseUrl { source })?;

        let scheme = url
            .scheme()
            .split('+')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let host = url
            .host_str()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ConfigError::dependency(format!(
                    "database URL has no host: {}",
                    Self::redact(raw)
                ))
            })?;

        let port = url.port().or_else(|| Self::well_known_port(&scheme));

        Ok(Self { scheme, host, port })
    }

    /// Default port for common data store schemes.
    pub fn well_known_port(scheme: &str) -> Option<u16> {
        match scheme {
            "postgres" | "postgresql" => Some(5432),
            "mysql" | "mariadb" => Some(3306),
            "redis" | "rediss" => Some(6379),
            "mongodb" => Some(27017),
            "mssql" | "sqlserver" => Some(1433),
            _ => None,
        }
    }

    /// Render a URL with its password masked.
    pub fn redact(raw: &str) -> String {
        match Url::parse(raw) {
            Ok(mut url) => {
                if url.password().is_some() {
                    // Only fails for cannot-be-a-base URLs, which carry no password
                    let _ = url.set_password(Some("****"));
                }
                url.to_string()
            }
            Err(_) => String::from("<unparseable>"),
        }
    }
}
