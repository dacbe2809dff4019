//! Exposure notification backend port
//!
//! Defines the capability set every exposure-matching backend offers to the
//! rest of the application. Which implementation is used is decided once at
//! startup from platform capabilities; callers only see this trait.

use async_trait::async_trait;
use domain::{
    DiagnosisKeyFile, ExposureConfiguration, ExposureInformation, ExposureSummary,
    TemporaryExposureKey,
};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApplicationError;

/// Known backend implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureBackendKind {
    /// Exposure Notification framework
    ExposureNotification,
    /// Contact Shield engine
    ContactShield,
}

impl fmt::Display for ExposureBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExposureNotification => write!(f, "exposure_notification"),
            Self::ContactShield => write!(f, "contact_shield"),
        }
    }
}

/// Port for exposure-matching backends
///
/// Every operation except the capability queries suspends until the
/// underlying engine call settles. Implementations perform no retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExposureNotificationPort: Send + Sync {
    /// Which backend this is
    fn backend_kind(&self) -> ExposureBackendKind;

    /// Whether the device can scan without location services enabled
    fn device_supports_locationless_scanning(&self) -> bool;

    /// Start broadcasting and scanning
    async fn start(&self) -> Result<(), ApplicationError>;

    /// Stop broadcasting and scanning
    async fn stop(&self) -> Result<(), ApplicationError>;

    /// Whether the engine is currently running
    async fn is_enabled(&self) -> Result<bool, ApplicationError>;

    /// Keys this device broadcast, normalized to the canonical form
    ///
    /// Records the engine reports in a malformed shape are skipped.
    async fn get_temporary_exposure_key_history(
        &self,
    ) -> Result<Vec<TemporaryExposureKey>, ApplicationError>;

    /// Verify and submit diagnosis key files for matching under `token`
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::VersionIncompatibility` if no file passes
    /// verification, and `ApplicationError::TransportFailure` if the engine
    /// rejects the submission.
    async fn provide_diagnosis_keys(
        &self,
        files: Vec<DiagnosisKeyFile>,
        configuration: ExposureConfiguration,
        token: String,
    ) -> Result<(), ApplicationError>;

    /// Aggregate match result for `token`
    async fn get_exposure_summary(&self, token: String)
    -> Result<ExposureSummary, ApplicationError>;

    /// Per-event match results for `token`
    async fn get_exposure_information(
        &self,
        token: String,
    ) -> Result<Vec<ExposureInformation>, ApplicationError>;
}
