//! Error types for the session runtime

use thiserror::Error;

/// Main error type for runtime operations
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Registration input rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Email/password pair not on the allow-list
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Key-value store failures
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Registration validation failures, checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("An account with this email already exists")]
    EmailTaken,
}

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read store: {0}")]
    ReadFailed(String),

    #[error("Failed to write store: {0}")]
    WriteFailed(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Type alias for Result with RuntimeError
pub type Result<T> = std::result::Result<T, RuntimeError>;
