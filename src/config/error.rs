//! Error types for configuration resolution and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from resolution, serialization, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("configuration at '{}' was invalid: {source}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying YAML syntax error
        #[source]
        source: serde_yaml::Error,
    },

    /// Missing required field that must be provided by an argument,
    /// environment variable, or config file.
    #[error("{field} must be provided. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Render target already occupied.
    ///
    /// Also covers probe outcomes other than "not found" (for example
    /// permission errors); the conservative refusal never clobbers data.
    #[error("failed to create config file at '{}', does it already exist", path.display())]
    FileExists {
        /// Path that was refused
        path: PathBuf,
    },

    /// Failed to serialize the configuration to YAML.
    #[error("failed to render configuration file: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Failed to write the configuration file.
    #[error("failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The cluster name field.
    pub const CLUSTER_NAME: &str = "cluster name";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
