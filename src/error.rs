use crate::validation::ValidationFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while processing a single item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("Invalid input data provided to {service}")]
    InvalidInput {
        service: &'static str,
        #[source]
        reason: ValidationFailure,
    },
}

impl ProcessError {
    pub fn invalid_input(service: &'static str, reason: ValidationFailure) -> Self {
        Self::InvalidInput { service, reason }
    }

    /// The validation failure behind this error
    pub fn reason(&self) -> &ValidationFailure {
        match self {
            Self::InvalidInput { reason, .. } => reason,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: String, value: String },
}

pub type Result<T, E = ProcessError> = std::result::Result<T, E>;
