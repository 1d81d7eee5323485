//! Terminal hand-off to the application server.

use crate::{BootError, BootResult, ServerCommand, ServerSpec};

use log::info;

/// Record of a hand-off that returned control to the caller.
///
/// [`ExecLauncher`] never produces one: on success the process image is
/// gone. Test launchers return one to stand in for the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub argv: Vec<String>,
}

/// Transfers control to the long-running server.
pub trait Launcher: Send + Sync {
    /// Start the server described by `spec`. Does not return on success
    /// for real launchers.
    fn launch(&self, spec: &ServerSpec) -> BootResult<Handoff>;
}

/// Replaces the current process with the server.
///
/// On Unix this is `execvp`, so the server inherits the PID and receives
/// container signals directly. Elsewhere the server runs as a child and
/// its exit status becomes ours.
#[derive(Debug, Clone)]
pub struct ExecLauncher {
    command: ServerCommand,
}

impl ExecLauncher {
    pub fn new(command: ServerCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &ServerCommand {
        &self.command
    }
}

impl Launcher for ExecLauncher {
    fn launch(&self, spec: &ServerSpec) -> BootResult<Handoff> {
        let argv = self.command.argv(spec);
        info!("Executing: {}", argv.join(" "));

        // Nothing after a successful exec runs, including buffered log writes.
        log::logger().flush();

        replace_process(&argv)
    }
}

#[cfg(unix)]
fn replace_process(argv: &[String]) -> BootResult<Handoff> {
    use std::ffi::CString;

    use nix::unistd::execvp;

    let program = argv.first().cloned().unwrap_or_default();

    let c_argv = argv
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            BootError::launch_failure(
                &program,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
            )
        })?;

    let Some(c_program) = c_argv.first() else {
        return Err(BootError::launch_failure(
            program,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty server command"),
        ));
    };

    match execvp(c_program, &c_argv) {
        Ok(never) => match never {},
        Err(errno) => Err(BootError::launch_failure(
            program,
            std::io::Error::from(errno),
        )),
    }
}

#[cfg(not(unix))]
fn replace_process(argv: &[String]) -> BootResult<Handoff> {
    let Some((program, args)) = argv.split_first() else {
        return Err(BootError::launch_failure(
            String::new(),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty server command"),
        ));
    };

    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .map_err(|e| BootError::launch_failure(program.as_str(), e))?;

    std::process::exit(status.code().unwrap_or(1))
}
