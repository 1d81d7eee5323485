use crate::{CommandMigrationRunner, MigrationResult, MigrationRunner};

fn sh(script: &str) -> CommandMigrationRunner {
    CommandMigrationRunner::new("sh", vec![String::from("-c"), String::from(script)])
}

#[tokio::test]
async fn test_zero_exit_is_applied() {
    let result = sh("echo 'INFO  [alembic.runtime.migration] Running upgrade'")
        .apply_migrations()
        .await;

    assert_eq!(result, MigrationResult::Applied);
}

#[tokio::test]
async fn test_non_zero_exit_is_failed_with_status_and_stderr() {
    let result = sh("echo 'relation \"users\" already exists' >&2; exit 3")
        .apply_migrations()
        .await;

    match result {
        MigrationResult::Failed { reason, exit_code } => {
            assert_eq!(exit_code, Some(3));
            assert!(reason.contains("relation \"users\" already exists"), "{reason}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stderr_tail_is_bounded() {
    let result = sh("for i in $(seq 1 50); do echo \"line $i\" >&2; done; exit 1")
        .apply_migrations()
        .await;

    let MigrationResult::Failed { reason, .. } = result else {
        panic!("expected Failed");
    };
    assert!(reason.contains("line 50"));
    assert!(!reason.contains("line 30\n"));
}

#[tokio::test]
async fn test_signal_death_maps_to_128_plus_signal() {
    let result = sh("kill -9 $$").apply_migrations().await;

    let MigrationResult::Failed { exit_code, .. } = result else {
        panic!("expected Failed");
    };
    assert_eq!(exit_code, Some(137));
}

#[tokio::test]
async fn test_missing_program_is_failed_with_127() {
    let runner = CommandMigrationRunner::new("bootgate-no-such-migrator", Vec::new());

    let result = runner.apply_migrations().await;

    match result {
        MigrationResult::Failed { reason, exit_code } => {
            assert_eq!(exit_code, Some(127));
            assert!(reason.contains("bootgate-no-such-migrator"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_utf8_output_does_not_stall() {
    let result = sh("printf '\\377\\376 binary\\n'; exit 0").apply_migrations().await;

    assert_eq!(result, MigrationResult::Applied);
}

#[test]
fn test_command_line_joins_program_and_args() {
    let runner = CommandMigrationRunner::new(
        "alembic",
        vec![String::from("upgrade"), String::from("head")],
    );

    assert_eq!(runner.command_line(), "alembic upgrade head");
}
