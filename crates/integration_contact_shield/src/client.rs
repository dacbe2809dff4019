//! Contact Shield client
//!
//! Composes the engine bridge with key normalization, risk configuration
//! mapping, key file verification and result mapping. Each operation issues
//! exactly one engine call.

use std::sync::Arc;

use domain::{
    DiagnosisKeyFile, ExposureConfiguration, ExposureInformation, ExposureSummary,
    TemporaryExposureKey,
};
use tracing::{debug, info, instrument};

use crate::bridge::call_engine;
use crate::config::ContactShieldConfig;
use crate::configuration_mapper::to_diagnosis_configuration;
use crate::engine::ContactShieldEngine;
use crate::error::ContactShieldError;
use crate::key_normalizer::normalize_periodic_keys;
use crate::mappers;
use crate::types::CallbackHandle;
use crate::verifier::{DiagnosisKeyGate, KeyFileVerifier};

/// Client for the Contact Shield engine
pub struct ContactShieldClient {
    /// Vendor engine handle
    engine: Arc<dyn ContactShieldEngine>,
    /// Verification gate in front of key submission
    gate: DiagnosisKeyGate,
    /// Notification target forwarded on submission
    callback: CallbackHandle,
}

impl ContactShieldClient {
    /// Create a new Contact Shield client
    ///
    /// # Errors
    ///
    /// Returns `ContactShieldError::Configuration` if the config is invalid.
    pub fn new(
        engine: Arc<dyn ContactShieldEngine>,
        verifier: Arc<dyn KeyFileVerifier>,
        callback: CallbackHandle,
        config: &ContactShieldConfig,
    ) -> Result<Self, ContactShieldError> {
        config.validate()?;

        Ok(Self {
            engine,
            gate: DiagnosisKeyGate::new(verifier, config.app_identity.clone()),
            callback,
        })
    }

    /// Application identity used for key file verification
    #[must_use]
    pub fn app_identity(&self) -> &str {
        self.gate.app_identity()
    }

    /// Start broadcasting and scanning
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<(), ContactShieldError> {
        call_engine(&self.engine, "start_contact_shield", |engine, completion| {
            engine.start_contact_shield(completion);
        })
        .await?;

        info!("Contact Shield started");
        Ok(())
    }

    /// Stop broadcasting and scanning
    #[instrument(skip(self))]
    pub async fn stop(&self) -> Result<(), ContactShieldError> {
        call_engine(&self.engine, "stop_contact_shield", |engine, completion| {
            engine.stop_contact_shield(completion);
        })
        .await?;

        info!("Contact Shield stopped");
        Ok(())
    }

    /// Whether the engine is running
    #[instrument(skip(self))]
    pub async fn is_running(&self) -> Result<bool, ContactShieldError> {
        let running = call_engine(
            &self.engine,
            "is_contact_shield_running",
            |engine, completion| engine.is_contact_shield_running(completion),
        )
        .await?;

        debug!(running, "Queried Contact Shield state");
        Ok(running)
    }

    /// Keys broadcast by this device in canonical form
    ///
    /// Malformed records are dropped; the rest are returned.
    #[instrument(skip(self))]
    pub async fn temporary_exposure_key_history(
        &self,
    ) -> Result<Vec<TemporaryExposureKey>, ContactShieldError> {
        let periodic_keys = call_engine(&self.engine, "get_periodic_key", |engine, completion| {
            engine.get_periodic_key(completion);
        })
        .await?;

        Ok(normalize_periodic_keys(&periodic_keys))
    }

    /// Verify key files and submit the accepted ones for matching
    ///
    /// # Errors
    ///
    /// Returns `ContactShieldError::VersionIncompatibility` if verification
    /// leaves no file to submit; nothing reaches the engine in that case.
    #[instrument(
        skip(self, files, configuration),
        fields(file_count = files.len(), token = %token)
    )]
    pub async fn provide_diagnosis_keys(
        &self,
        files: Vec<DiagnosisKeyFile>,
        configuration: &ExposureConfiguration,
        token: String,
    ) -> Result<(), ContactShieldError> {
        let verified = self.gate.verified_files(files).await?;
        let submitted = verified.len();

        let paths = verified
            .into_iter()
            .map(DiagnosisKeyFile::into_path)
            .collect();
        let diagnosis_configuration = to_diagnosis_configuration(configuration);
        let callback = self.callback.clone();

        call_engine(&self.engine, "put_shared_key_files", move |engine, completion| {
            engine.put_shared_key_files(
                callback,
                paths,
                diagnosis_configuration,
                token,
                completion,
            );
        })
        .await?;

        info!(submitted, "Diagnosis key files submitted");
        Ok(())
    }

    /// Aggregate match result for `token`
    #[instrument(skip(self), fields(token = %token))]
    pub async fn exposure_summary(
        &self,
        token: String,
    ) -> Result<ExposureSummary, ContactShieldError> {
        let sketch = call_engine(&self.engine, "get_contact_sketch", move |engine, completion| {
            engine.get_contact_sketch(token, completion);
        })
        .await?;

        Ok(mappers::exposure_summary(&sketch))
    }

    /// Per-event match results for `token`
    #[instrument(skip(self), fields(token = %token))]
    pub async fn exposure_information(
        &self,
        token: String,
    ) -> Result<Vec<ExposureInformation>, ContactShieldError> {
        let details = call_engine(&self.engine, "get_contact_detail", move |engine, completion| {
            engine.get_contact_detail(token, completion);
        })
        .await?;

        debug!(count = details.len(), "Received contact details");
        Ok(mappers::exposure_information_list(&details))
    }
}

impl std::fmt::Debug for ContactShieldClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactShieldClient")
            .field("app_identity", &self.gate.app_identity())
            .finish_non_exhaustive()
    }
}
