//! Error types for the mbm-app service layer.

use std::path::PathBuf;

/// Shell-side failures. Undefined results from the engine are not errors
/// and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Unknown operand: '{0}' (not a menu label or value token)")]
    UnknownOperand(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Core(#[from] mbm_core::CoreError),
}

/// Result type for mbm-app operations.
pub type AppResult<T> = Result<T, AppError>;
