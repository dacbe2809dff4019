//! Error types for Contact Shield integration

use thiserror::Error;

use crate::types::EngineFailure;

/// Errors that can occur during Contact Shield operations
#[derive(Debug, Error)]
pub enum ContactShieldError {
    /// The engine settled the call through its failure callback
    #[error("Engine call {operation} failed: {source}")]
    Engine {
        /// Engine operation that failed
        operation: &'static str,
        /// Failure reported by the engine
        #[source]
        source: EngineFailure,
    },

    /// The engine dropped the call without invoking either callback
    #[error("Engine call {operation} was abandoned without completion")]
    Abandoned {
        /// Engine operation that was abandoned
        operation: &'static str,
    },

    /// The diagnosis key batch cannot be processed
    #[error("Version incompatibility: {0}")]
    VersionIncompatibility(String),

    /// A periodic key record cannot be normalized
    #[error("Malformed periodic key: {0}")]
    MalformedKey(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ContactShieldError {
    /// Create an engine failure error
    #[must_use]
    pub const fn engine(operation: &'static str, source: EngineFailure) -> Self {
        Self::Engine { operation, source }
    }

    /// Create a version incompatibility error
    #[must_use]
    pub fn version_incompatibility(msg: impl Into<String>) -> Self {
        Self::VersionIncompatibility(msg.into())
    }

    /// Create a malformed key error
    #[must_use]
    pub fn malformed_key(msg: impl Into<String>) -> Self {
        Self::MalformedKey(msg.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Name of the engine operation for transport-level errors
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Engine { operation, .. } | Self::Abandoned { operation } => Some(*operation),
            _ => None,
        }
    }
}
