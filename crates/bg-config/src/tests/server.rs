use crate::Config;
use crate::tests::{EnvGuard, setup_config_file};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server and Migration
// =========================================================================

#[test]
#[serial]
fn given_server_port_zero_when_validate_then_error() {
    // Given - the server must bind a fixed, known port
    let _fixture = setup_config_file("");
    let _port = EnvGuard::set("BOOTGATE_SERVER_PORT", "0");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_server_program_when_validate_then_error() {
    // Given
    let _fixture = setup_config_file("");
    let _program = EnvGuard::set("BOOTGATE_SERVER_PROGRAM", "");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_reload_without_flag_when_validate_then_error() {
    // Given
    let _fixture = setup_config_file("[server]\nreload = true\nreload_flag = \"\"\n");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_reload_without_flag_and_no_bind_args_when_validate_then_ok() {
    // Given - flags are never appended, so an empty one is harmless
    let _fixture =
        setup_config_file("[server]\nreload = true\nreload_flag = \"\"\nbind_args = false\n");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_migration_program_when_validate_then_error() {
    // Given
    let _fixture = setup_config_file("[migration]\nprogram = \"\"\n");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_log_file_when_validate_then_error() {
    // Given
    let _fixture = setup_config_file("");
    let _file = EnvGuard::set("BOOTGATE_LOG_FILE", " ");

    // When
    let config = Config::load(None).unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
