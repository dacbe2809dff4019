//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or entity failed its invariants
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("rolling period 145 exceeds 144".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: rolling period 145 exceeds 144"
        );
    }

    #[test]
    fn error_is_debug() {
        let err = DomainError::ValidationError("x".to_string());
        assert!(format!("{err:?}").contains("ValidationError"));
    }
}
