//! Error types for the application layer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] skillgap_core::CoreError),

    #[error(transparent)]
    Runtime(#[from] skillgap_runtime::RuntimeError),

    /// Input file could not be read or decoded
    #[error("Failed to load {path}: {reason}")]
    Input { path: PathBuf, reason: String },

    /// No gap record for the requirement or skill
    #[error("No skills gap for {0}")]
    UnknownGap(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_runtime::{RuntimeError, ValidationError};

    #[test]
    fn test_runtime_messages_pass_through() {
        let err: AppError = RuntimeError::from(ValidationError::InvalidEmail).into();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_input_error_names_path() {
        let err = AppError::Input {
            path: PathBuf::from("catalog.yaml"),
            reason: "missing field `priority`".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load catalog.yaml: missing field `priority`");
    }
}
