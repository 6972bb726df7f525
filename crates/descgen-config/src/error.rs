//! Error types for configuration loading.

use std::path::PathBuf;

/// Errors that can occur while loading a robot configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// YAML deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file extension does not name a known configuration format.
    #[error("unsupported configuration format: {} (expected .yaml, .yml or .toml)", path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Structural validation failed.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
