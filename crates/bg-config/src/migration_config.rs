use crate::{ConfigError, ConfigErrorResult, DEFAULT_MIGRATION_ARGS, DEFAULT_MIGRATION_PROGRAM};

use serde::Deserialize;

/// External schema-migration tool, invoked once to advance to the latest revision.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            program: String::from(DEFAULT_MIGRATION_PROGRAM),
            args: DEFAULT_MIGRATION_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MigrationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::migration("migration.program must not be empty"));
        }

        Ok(())
    }
}
