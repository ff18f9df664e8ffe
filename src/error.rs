//! Error types for the configuration collaborator layer.
//!
//! Resolution itself never fails; only the surrounding file and
//! serialization glue can produce a hard error.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration file and serialization operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the JSON configuration.
    #[error("Failed to parse JSON config: {0}")]
    JsonParse(#[source] serde_json::Error),

    /// Failed to serialize the resolved record for display.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}
