//! bootgate - container entrypoint for database-backed services
//!
//! Waits for the data store to accept connections, applies pending
//! migrations exactly once, then replaces itself with the server.
//!
//! # Examples
//!
//! ```bash
//! # Defaults: wait for db:5432, `alembic upgrade head`, uvicorn on 0.0.0.0:8000
//! bootgate
//!
//! # Wait up to 60s, then run a custom server command verbatim
//! bootgate --host postgres --timeout 60 -- gunicorn -b 0.0.0.0:8000 app:wsgi
//! ```

use bg_entrypoint::{Cli, build_orchestrator, load_config, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Nothing is logged before the logger exists, so config errors go to stderr
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {e}");
        return ExitCode::from(e.exit_code());
    }

    info!("Starting bootgate v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let orchestrator = match build_orchestrator(&config) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let report = orchestrator.run().await;

    match report.result {
        // ExecLauncher does not return on success
        Ok(_) => ExitCode::SUCCESS,
        Err(ref e) => {
            error!("{e}");
            error!("{}", e.recovery_hint());
            error!("Startup aborted in state {}", report.final_state());
            ExitCode::from(report.exit_code())
        }
    }
}
