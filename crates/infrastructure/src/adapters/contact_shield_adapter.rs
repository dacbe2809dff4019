//! Contact Shield adapter - Implements ExposureNotificationPort using the
//! integration_contact_shield crate

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ExposureBackendKind, ExposureNotificationPort};
use async_trait::async_trait;
use domain::{
    DiagnosisKeyFile, ExposureConfiguration, ExposureInformation, ExposureSummary,
    TemporaryExposureKey,
};
use integration_contact_shield::{
    CallbackHandle, ContactShieldClient, ContactShieldConfig, ContactShieldEngine,
    ContactShieldError, KeyFileVerifier,
};
use tracing::{instrument, warn};

/// Adapter that implements `ExposureNotificationPort` using `ContactShieldClient`
pub struct ContactShieldAdapter {
    client: ContactShieldClient,
}

impl ContactShieldAdapter {
    /// Contact Shield always needs location services to scan
    pub const DEVICE_SUPPORTS_LOCATIONLESS_SCANNING: bool = false;

    /// Create a new Contact Shield adapter
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the config is invalid.
    pub fn new(
        engine: Arc<dyn ContactShieldEngine>,
        verifier: Arc<dyn KeyFileVerifier>,
        callback: CallbackHandle,
        config: &ContactShieldConfig,
    ) -> Result<Self, ApplicationError> {
        let client =
            ContactShieldClient::new(engine, verifier, callback, config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: ContactShieldClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client
    #[must_use]
    pub const fn client(&self) -> &ContactShieldClient {
        &self.client
    }

    /// Map Contact Shield error to application error
    fn map_error(err: ContactShieldError) -> ApplicationError {
        match err {
            ContactShieldError::Engine { operation, source } => {
                ApplicationError::transport(operation, source)
            },
            err @ ContactShieldError::Abandoned { operation } => {
                ApplicationError::transport(operation, err)
            },
            ContactShieldError::VersionIncompatibility(e) => {
                ApplicationError::VersionIncompatibility(e)
            },
            ContactShieldError::MalformedKey(e) => {
                warn!(error = %e, "Malformed key escaped normalization");
                ApplicationError::Internal(format!("Malformed periodic key: {e}"))
            },
            ContactShieldError::Configuration(e) => ApplicationError::Configuration(e),
        }
    }
}

impl std::fmt::Debug for ContactShieldAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactShieldAdapter")
            .field("app_identity", &self.client.app_identity())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ExposureNotificationPort for ContactShieldAdapter {
    fn backend_kind(&self) -> ExposureBackendKind {
        ExposureBackendKind::ContactShield
    }

    fn device_supports_locationless_scanning(&self) -> bool {
        Self::DEVICE_SUPPORTS_LOCATIONLESS_SCANNING
    }

    #[instrument(skip(self))]
    async fn start(&self) -> Result<(), ApplicationError> {
        self.client.start().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn stop(&self) -> Result<(), ApplicationError> {
        self.client.stop().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn is_enabled(&self) -> Result<bool, ApplicationError> {
        self.client.is_running().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get_temporary_exposure_key_history(
        &self,
    ) -> Result<Vec<TemporaryExposureKey>, ApplicationError> {
        self.client
            .temporary_exposure_key_history()
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, files, configuration), fields(file_count = files.len()))]
    async fn provide_diagnosis_keys(
        &self,
        files: Vec<DiagnosisKeyFile>,
        configuration: ExposureConfiguration,
        token: String,
    ) -> Result<(), ApplicationError> {
        self.client
            .provide_diagnosis_keys(files, &configuration, token)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get_exposure_summary(
        &self,
        token: String,
    ) -> Result<ExposureSummary, ApplicationError> {
        self.client
            .exposure_summary(token)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get_exposure_information(
        &self,
        token: String,
    ) -> Result<Vec<ExposureInformation>, ApplicationError> {
        self.client
            .exposure_information(token)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    use integration_contact_shield::{
        Completion, ContactDetail, ContactSketch, DiagnosisConfiguration, EngineFailure,
        PeriodicKey, VerificationError,
    };

    struct RejectingVerifier;

    #[async_trait]
    impl KeyFileVerifier for RejectingVerifier {
        async fn verify(
            &self,
            _app_identity: &str,
            _file: &DiagnosisKeyFile,
        ) -> Result<bool, VerificationError> {
            Ok(false)
        }
    }

    /// Engine whose every call fails with status 17
    struct UnavailableEngine;

    impl ContactShieldEngine for UnavailableEngine {
        fn start_contact_shield(&self, completion: Completion<()>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn stop_contact_shield(&self, completion: Completion<()>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn is_contact_shield_running(&self, completion: Completion<bool>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn get_periodic_key(&self, completion: Completion<Vec<PeriodicKey>>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn put_shared_key_files(
            &self,
            _callback: CallbackHandle,
            _files: Vec<PathBuf>,
            _configuration: DiagnosisConfiguration,
            _token: String,
            completion: Completion<()>,
        ) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn get_contact_sketch(&self, _token: String, completion: Completion<ContactSketch>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }

        fn get_contact_detail(&self, _token: String, completion: Completion<Vec<ContactDetail>>) {
            completion.fail(EngineFailure::new(17, "api unavailable"));
        }
    }

    fn adapter() -> ContactShieldAdapter {
        ContactShieldAdapter::new(
            Arc::new(UnavailableEngine),
            Arc::new(RejectingVerifier),
            CallbackHandle::new(()),
            &ContactShieldConfig::new("com.example.tracing"),
        )
        .unwrap()
    }

    #[test]
    fn capability_flags() {
        let adapter = adapter();
        assert_eq!(adapter.backend_kind(), ExposureBackendKind::ContactShield);
        assert!(!adapter.device_supports_locationless_scanning());
        assert!(!ContactShieldAdapter::DEVICE_SUPPORTS_LOCATIONLESS_SCANNING);
    }

    #[test]
    fn invalid_config_is_configuration_error() {
        let result = ContactShieldAdapter::new(
            Arc::new(UnavailableEngine),
            Arc::new(RejectingVerifier),
            CallbackHandle::new(()),
            &ContactShieldConfig::default(),
        );
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn debug_format() {
        let debug = format!("{:?}", adapter());
        assert!(debug.contains("ContactShieldAdapter"));
        assert!(debug.contains("com.example.tracing"));
    }

    #[tokio::test]
    async fn engine_failure_becomes_transport_failure_with_cause() {
        let err = adapter().start().await.unwrap_err();

        match &err {
            ApplicationError::TransportFailure { operation, .. } => {
                assert_eq!(operation, "start_contact_shield");
            },
            other => unreachable!("Expected transport failure, got {other:?}"),
        }
        let cause = err.source().unwrap();
        assert_eq!(cause.to_string(), "engine status 17: api unavailable");
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn rejected_batch_becomes_version_incompatibility() {
        let result = adapter()
            .provide_diagnosis_keys(
                vec![DiagnosisKeyFile::new("a.zip")],
                ExposureConfiguration::default(),
                "token".to_string(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::VersionIncompatibility(_))
        ));
    }

    #[test]
    fn abandoned_call_maps_to_transport_failure() {
        let err = ContactShieldAdapter::map_error(ContactShieldError::Abandoned {
            operation: "get_contact_detail",
        });
        match err {
            ApplicationError::TransportFailure { operation, .. } => {
                assert_eq!(operation, "get_contact_detail");
            },
            other => unreachable!("Expected transport failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_key_maps_to_internal() {
        let err = ContactShieldAdapter::map_error(ContactShieldError::malformed_key("empty"));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
