//! Diagnosis key verification gate
//!
//! Files are checked one by one against an external verifier before any of
//! them reach the engine. A rejected file is dropped on its own; a verifier
//! error aborts the whole batch; an empty result aborts the batch as well.
//! Both abort causes surface as the same version-incompatibility error.

use std::sync::Arc;

use async_trait::async_trait;
use domain::DiagnosisKeyFile;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::error::ContactShieldError;

/// Errors raised by the verification collaborator itself
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The file is not a readable key container
    #[error("Malformed key container: {0}")]
    MalformedContainer(String),

    /// The container uses a format this verifier does not know
    #[error("Unsupported key file format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// External check of a diagnosis key file's authenticity
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyFileVerifier: Send + Sync {
    /// Whether `file` is valid for the app identified by `app_identity`
    ///
    /// # Errors
    ///
    /// Returns `VerificationError` if the file cannot be checked at all.
    async fn verify(
        &self,
        app_identity: &str,
        file: &DiagnosisKeyFile,
    ) -> Result<bool, VerificationError>;
}

/// All-or-nothing gate in front of key submission
pub struct DiagnosisKeyGate {
    verifier: Arc<dyn KeyFileVerifier>,
    app_identity: String,
}

impl DiagnosisKeyGate {
    /// Create a gate checking files on behalf of `app_identity`
    #[must_use]
    pub fn new(verifier: Arc<dyn KeyFileVerifier>, app_identity: impl Into<String>) -> Self {
        Self {
            verifier,
            app_identity: app_identity.into(),
        }
    }

    /// Identity passed to the verifier
    #[must_use]
    pub fn app_identity(&self) -> &str {
        &self.app_identity
    }

    /// Return the files that passed verification, in input order
    ///
    /// # Errors
    ///
    /// Returns `ContactShieldError::VersionIncompatibility` if the verifier
    /// fails on any file (remaining files are not checked) or if no file
    /// passes.
    #[instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn verified_files(
        &self,
        files: Vec<DiagnosisKeyFile>,
    ) -> Result<Vec<DiagnosisKeyFile>, ContactShieldError> {
        let total = files.len();
        let mut accepted = Vec::with_capacity(total);

        for file in files {
            match self.verifier.verify(&self.app_identity, &file).await {
                Ok(true) => accepted.push(file),
                Ok(false) => warn!(file = %file, "Diagnosis key file failed verification"),
                Err(e) => {
                    warn!(file = %file, error = %e, "Diagnosis key verifier failed");
                    return Err(ContactShieldError::version_incompatibility(format!(
                        "key file {file} could not be verified: {e}"
                    )));
                },
            }
        }

        if accepted.is_empty() {
            return Err(ContactShieldError::version_incompatibility(format!(
                "none of {total} key files passed verification"
            )));
        }

        info!(
            accepted = accepted.len(),
            rejected = total - accepted.len(),
            "Diagnosis key files verified"
        );
        Ok(accepted)
    }
}

impl std::fmt::Debug for DiagnosisKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosisKeyGate")
            .field("app_identity", &self.app_identity)
            .finish_non_exhaustive()
    }
}
