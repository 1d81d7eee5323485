//! Translation from layered configuration to the orchestrator's types.

use crate::cli::Cli;
use crate::error::Result as EntrypointResult;

use bg_config::{Config, DependencyConfig, MigrationConfig, ServerConfig};
use bg_core::{
    CommandMigrationRunner, DependencyTarget, ExecLauncher, Orchestrator, ProbeMode,
    ServerCommand, ServerSpec, TcpProbe,
};

use std::time::Duration;

pub type BootOrchestrator = Orchestrator<TcpProbe, CommandMigrationRunner, ExecLauncher>;

/// File, then environment, then command line; validated once at the end.
pub fn load_config(cli: &Cli) -> EntrypointResult<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

pub fn dependency_target(config: &DependencyConfig) -> EntrypointResult<DependencyTarget> {
    let (host, port) = config.endpoint()?;

    let target = DependencyTarget::new(
        host,
        port,
        Duration::from_secs(config.timeout_secs),
        ProbeMode::from_strict(config.strict),
    )?
    .with_poll_interval(Duration::from_millis(config.poll_interval_ms))?
    .with_connect_timeout(Duration::from_millis(config.connect_timeout_ms))?;

    Ok(target)
}

pub fn server_spec(config: &ServerConfig) -> EntrypointResult<ServerSpec> {
    Ok(ServerSpec::new(config.host.clone(), config.port, config.reload)?)
}

pub fn server_command(config: &ServerConfig) -> ServerCommand {
    if config.bind_args {
        ServerCommand::templated(config.program.clone(), config.args.clone()).with_flags(
            config.host_flag.clone(),
            config.port_flag.clone(),
            config.reload_flag.clone(),
        )
    } else {
        ServerCommand::verbatim(config.program.clone(), config.args.clone())
    }
}

pub fn migration_runner(config: &MigrationConfig) -> CommandMigrationRunner {
    CommandMigrationRunner::new(config.program.clone(), config.args.clone())
}

pub fn build_orchestrator(config: &Config) -> EntrypointResult<BootOrchestrator> {
    Ok(Orchestrator::new(
        dependency_target(&config.dependency)?,
        server_spec(&config.server)?,
        TcpProbe::new(),
        migration_runner(&config.migration),
        ExecLauncher::new(server_command(&config.server)),
    ))
}
