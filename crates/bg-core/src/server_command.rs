use crate::ServerSpec;

const HOST_FLAG: &str = "--host";
const PORT_FLAG: &str = "--port";
const RELOAD_FLAG: &str = "--reload";

/// Program and arguments used to start the server.
///
/// In templated form the bind address and reload switch from the
/// [`ServerSpec`] are appended as flags; a verbatim command runs as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    program: String,
    args: Vec<String>,
    bind_args: bool,
    host_flag: String,
    port_flag: String,
    reload_flag: String,
}

impl ServerCommand {
    /// Command whose bind flags are filled in from the spec.
    pub fn templated<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            bind_args: true,
            host_flag: String::from(HOST_FLAG),
            port_flag: String::from(PORT_FLAG),
            reload_flag: String::from(RELOAD_FLAG),
        }
    }

    /// Command run exactly as given.
    pub fn verbatim<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            bind_args: false,
            ..Self::templated(program, args)
        }
    }

    /// Override the flag names for servers that are not uvicorn-compatible.
    pub fn with_flags<S: Into<String>>(
        mut self,
        host_flag: S,
        port_flag: S,
        reload_flag: S,
    ) -> Self {
        self.host_flag = host_flag.into();
        self.port_flag = port_flag.into();
        self.reload_flag = reload_flag.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument vector, program first.
    pub fn argv(&self, spec: &ServerSpec) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 6);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());

        if self.bind_args {
            argv.push(self.host_flag.clone());
            argv.push(spec.bind_host().to_string());
            argv.push(self.port_flag.clone());
            argv.push(spec.bind_port().to_string());

            if spec.reload_on_change() {
                argv.push(self.reload_flag.clone());
            }
        }

        argv
    }
}
