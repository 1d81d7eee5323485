mod log_level;
mod server;

use crate::CONFIG_PATH_ENV;

use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads; cleared so the host environment
/// (CI images often export DATABASE_URL) cannot leak into assertions.
const KNOWN_VARS: &[&str] = &[
    "BOOTGATE_DEPENDENCY_HOST",
    "BOOTGATE_DEPENDENCY_PORT",
    "BOOTGATE_DEPENDENCY_TIMEOUT_SECS",
    "BOOTGATE_DEPENDENCY_STRICT",
    "BOOTGATE_DEPENDENCY_POLL_INTERVAL_MS",
    "BOOTGATE_DEPENDENCY_CONNECT_TIMEOUT_MS",
    "BOOTGATE_DATABASE_URL",
    "DATABASE_URL",
    "BOOTGATE_MIGRATION_PROGRAM",
    "BOOTGATE_MIGRATION_ARGS",
    "BOOTGATE_SERVER_PROGRAM",
    "BOOTGATE_SERVER_ARGS",
    "BOOTGATE_SERVER_HOST",
    "BOOTGATE_SERVER_PORT",
    "BOOTGATE_SERVER_RELOAD",
    "BOOTGATE_LOG_LEVEL",
    "BOOTGATE_LOG_COLORED",
    "BOOTGATE_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Isolated config environment: a temp dir holding `bootgate.toml`,
/// BOOTGATE_CONFIG pointing at it, every other known variable cleared.
pub(crate) struct ConfigFixture {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

/// Write `contents` as the config file and isolate the environment
pub(crate) fn setup_config_file(contents: &str) -> ConfigFixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bootgate.toml");
    std::fs::write(&path, contents).unwrap();

    let mut guards: Vec<EnvGuard> = KNOWN_VARS.iter().map(|k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::set(CONFIG_PATH_ENV, path.to_str().unwrap()));

    ConfigFixture {
        dir,
        _guards: guards,
    }
}
