//! Error types for taskforge-core.

use thiserror::Error;

/// All errors that can arise from registry operations.
///
/// Local actions never surface here: by contract with the host tool they
/// report success as a plain `bool` and swallow any underlying failure.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A task name was requested that is not part of the fixed catalog.
    #[error("unknown task '{name}'; run `taskforge list` to see the catalog")]
    UnknownTask { name: String },

    /// YAML serialization error when emitting the task manifest.
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
