//! Schema migration through an external tool.

use crate::MigrationResult;
use crate::error::{EXIT_CANNOT_EXECUTE, EXIT_NOT_FOUND};

use std::collections::VecDeque;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use log::{Level, info, log};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Stderr lines kept for the failure reason.
const STDERR_TAIL_LINES: usize = 20;

/// Advances the schema to its latest revision.
#[async_trait]
pub trait MigrationRunner: Send + Sync {
    async fn apply_migrations(&self) -> MigrationResult;
}

/// Runs a migration command (e.g. `alembic upgrade head`) to completion.
///
/// Output is relayed line by line while the tool runs. No timeout is
/// imposed.
#[derive(Debug, Clone)]
pub struct CommandMigrationRunner {
    program: String,
    args: Vec<String>,
}

impl CommandMigrationRunner {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Forward each line of `pipe` to the log, returning the last lines seen.
    async fn relay<R: AsyncRead + Unpin>(pipe: Option<R>, level: Level) -> VecDeque<String> {
        let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
        let Some(pipe) = pipe else {
            return tail;
        };

        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();

        // Raw bytes: a non-UTF-8 line must not end the relay while the
        // child still writes.
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                    log!(level, "[migration] {line}");

                    if tail.len() == STDERR_TAIL_LINES {
                        tail.pop_front();
                    }
                    tail.push_back(line);
                }
            }
        }

        tail
    }

    /// Exit status to propagate: the code, or 128+signal when killed.
    fn status_code(status: ExitStatus) -> Option<i32> {
        if let Some(code) = status.code() {
            return Some(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Some(128 + signal);
            }
        }

        None
    }
}

#[async_trait]
impl MigrationRunner for CommandMigrationRunner {
    async fn apply_migrations(&self) -> MigrationResult {
        let command_line = self.command_line();

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                let exit_code = match e.kind() {
                    std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                    _ => EXIT_CANNOT_EXECUTE,
                };
                return MigrationResult::Failed {
                    reason: format!("failed to start `{command_line}`: {e}"),
                    exit_code: Some(i32::from(exit_code)),
                };
            }
        };

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (_, stderr_tail, status) = tokio::join!(
            Self::relay(stdout, Level::Info),
            Self::relay(stderr, Level::Warn),
            child.wait()
        );

        match status {
            Ok(status) if status.success() => {
                info!("`{command_line}` completed");
                MigrationResult::Applied
            }
            Ok(status) => {
                let reason = if stderr_tail.is_empty() {
                    format!("`{command_line}` exited with {status}")
                } else {
                    let tail: Vec<String> = stderr_tail.into_iter().collect();
                    format!("`{command_line}` exited with {status}: {}", tail.join("\n"))
                };
                MigrationResult::Failed {
                    reason,
                    exit_code: Self::status_code(status),
                }
            }
            Err(e) => MigrationResult::Failed {
                reason: format!("failed to wait for `{command_line}`: {e}"),
                exit_code: None,
            },
        }
    }
}
