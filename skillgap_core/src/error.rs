//! Error types for the skills-gap core.
//!
//! Scoring, aggregation and export never fail; only collection mutations
//! (unknown identifiers, malformed input) surface a [`CoreError`].

/// Main error type for core operations.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// No record with the given identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the given identifier is already present.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Input violates a field constraint.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Result with CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::NotFound("skill 42".to_string());
        assert_eq!(err.to_string(), "Not found: skill 42");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CoreError::InvalidInput("duration must be non-negative".to_string());
        assert_eq!(err.to_string(), "Invalid input: duration must be non-negative");
    }
}
