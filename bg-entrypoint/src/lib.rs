pub mod cli;
pub mod error;
pub mod logger;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{EntrypointError, Result as EntrypointResult};
pub use wiring::{BootOrchestrator, build_orchestrator, load_config};
