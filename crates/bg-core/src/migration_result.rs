/// Result of the single migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationResult {
    /// Schema is at the latest revision
    Applied,
    /// The tool failed; never retried
    Failed {
        reason: String,
        /// Status to propagate, when the tool produced or implies one
        exit_code: Option<i32>,
    },
}

impl MigrationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
