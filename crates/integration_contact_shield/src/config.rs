//! Configuration for the Contact Shield backend

use serde::{Deserialize, Serialize};

use crate::error::ContactShieldError;

/// Configuration for the Contact Shield backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactShieldConfig {
    /// Application identity the key verifier checks file signatures against
    #[serde(default)]
    pub app_identity: String,
}

impl ContactShieldConfig {
    /// Create a config for the given application identity
    #[must_use]
    pub fn new(app_identity: impl Into<String>) -> Self {
        Self {
            app_identity: app_identity.into(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the application identity is blank.
    pub fn validate(&self) -> Result<(), ContactShieldError> {
        if self.app_identity.trim().is_empty() {
            return Err(ContactShieldError::config(
                "app_identity is required for diagnosis key verification",
            ));
        }
        Ok(())
    }
}
