//! Infrastructure-side error types
//!
//! Every public API call surfaces `smartpath_domain::ApiError`. The types
//! here cover the layers underneath: credential storage and configuration
//! loading. Conversions from third-party errors live in [`conversions`].

use std::path::PathBuf;

use smartpath_domain::ApiError;
use thiserror::Error;

pub mod conversions;

pub use conversions::InfraError;

/// Failure reading or writing a persisted credential
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a valid key/value document: {0}")]
    Format(String),

    #[error("keychain entry not found")]
    NotFound,

    #[error("keychain error: {0}")]
    Keychain(String),
}

/// Failure assembling a `ClientConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No config file found in any of the standard locations")]
    NoConfigFile,

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {format} format: {reason}")]
    Format { format: &'static str, reason: String },

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Client(#[from] ApiError),
}

impl From<ConfigError> for ApiError {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::Client(inner) => inner,
            other => Self::Config(other.to_string()),
        }
    }
}
