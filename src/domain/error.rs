use std::io;

use thiserror::Error;

use crate::domain::configuration::{AccessError, LoadError};

/// Application-wide error type for wikisync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration loading or validation failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A configuration value was read before it was loaded.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Appending to the step output file failed.
    #[error("Failed to write step output {path}: {details}")]
    StepOutput { path: String, details: String },

    /// Serializing the configuration summary failed.
    #[error("Failed to serialize configuration summary: {0}")]
    Serialization(String),

    /// Logging could not be initialized.
    #[error("{0}")]
    Logger(String),
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Load(_) | AppError::Access(_) => 1,
            AppError::Io(_)
            | AppError::StepOutput { .. }
            | AppError::Serialization(_)
            | AppError::Logger(_) => 2,
        }
    }
}
