use crate::EntrypointError;

use bg_config::ConfigError;
use bg_core::BootError;

use googletest::prelude::*;

#[test]
fn given_config_error_when_exiting_then_usage_code() {
    let error = EntrypointError::from(ConfigError::dependency("dependency.port must be 1-65535"));

    assert_that!(error.exit_code(), eq(2));
}

#[test]
fn given_boot_error_when_exiting_then_boot_code_passes_through() {
    let error = EntrypointError::from(BootError::migration_failure("alembic exited", Some(4)));

    assert_that!(error.exit_code(), eq(4));
    assert_that!(error.to_string(), contains_substring("alembic exited"));
}

#[test]
fn given_logger_error_when_exiting_then_generic_failure() {
    let error = EntrypointError::logger("already initialized");

    assert_that!(error.exit_code(), eq(1));
}

#[test]
fn given_unwritable_log_path_when_initializing_then_log_file_error() {
    // A regular file cannot be used as a parent directory
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let logging = bg_config::LoggingConfig {
        file: Some(blocker.join("bootgate.log").to_string_lossy().into_owned()),
        ..bg_config::LoggingConfig::default()
    };

    let result = crate::logger::initialize(&logging);

    assert_that!(
        matches!(result, Err(EntrypointError::LogFile { .. })),
        eq(true)
    );
}
