//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Boxed underlying cause carried by transport failures
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backend engine call settled through its failure path
    #[error("Transport failure during {operation}: {source}")]
    TransportFailure {
        /// Backend operation that failed
        operation: String,
        /// Cause reported by the engine
        #[source]
        source: BoxedCause,
    },

    /// A diagnosis key batch cannot be processed by this backend
    #[error("Version incompatibility: {0}")]
    VersionIncompatibility(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a transport failure preserving the engine's cause
    pub fn transport(operation: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        Self::TransportFailure {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Check if this error is retryable
    ///
    /// No retry happens in this layer; the flag is for orchestrators that
    /// apply their own policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApplicationError::TransportFailure { .. })
    }
}
