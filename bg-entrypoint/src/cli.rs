use bg_config::{Config, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bootgate")]
#[command(about = "Wait for a data store, run migrations once, then become the server")]
#[command(version)]
pub struct Cli {
    /// Config file (default: $BOOTGATE_CONFIG, then ./bootgate.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Dependency host to wait for
    #[arg(long)]
    pub host: Option<String>,

    /// Dependency TCP port
    #[arg(long)]
    pub port: Option<u16>,

    /// Maximum wait for the dependency, in seconds
    #[arg(long, short = 't')]
    pub timeout: Option<u64>,

    /// Abort if the dependency never becomes reachable
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Log and continue if the dependency never becomes reachable
    #[arg(long)]
    pub lenient: bool,

    /// Address the server binds to
    #[arg(long, conflicts_with = "command")]
    pub bind_host: Option<String>,

    /// Port the server binds to
    #[arg(long, conflicts_with = "command")]
    pub bind_port: Option<u16>,

    /// Restart the server when sources change
    #[arg(long, conflicts_with_all = ["no_reload", "command"])]
    pub reload: bool,

    /// Disable reload even if configured
    #[arg(long)]
    pub no_reload: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Server command to exec instead of the configured one (run verbatim,
    /// so it cannot be combined with --bind-host, --bind-port or --reload)
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Apply command-line values on top of file and environment config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.dependency.host = Some(host.clone());
        }
        if let Some(port) = self.port {
            config.dependency.port = Some(port);
        }
        if let Some(timeout) = self.timeout {
            config.dependency.timeout_secs = timeout;
        }
        if self.strict {
            config.dependency.strict = true;
        } else if self.lenient {
            config.dependency.strict = false;
        }

        if let Some(ref bind_host) = self.bind_host {
            config.server.host = bind_host.clone();
        }
        if let Some(bind_port) = self.bind_port {
            config.server.port = bind_port;
        }
        if self.reload {
            config.server.reload = true;
        } else if self.no_reload {
            config.server.reload = false;
        }

        if let Some(ref level) = self.log_level {
            let Ok(level) = level.parse::<LogLevel>();
            config.logging.level = level;
        }

        if let Some((program, args)) = self.command.split_first() {
            config.server.program = program.clone();
            config.server.args = args.to_vec();
            config.server.bind_args = false;
        }
    }
}
