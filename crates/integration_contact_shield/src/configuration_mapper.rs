//! Risk configuration mapping
//!
//! Positional copy into the engine's layout. Nothing is validated here; the
//! engine rejects configurations it cannot use.

use domain::ExposureConfiguration;

use crate::types::DiagnosisConfiguration;

/// Translate the canonical risk configuration into the engine's layout
#[must_use]
pub fn to_diagnosis_configuration(configuration: &ExposureConfiguration) -> DiagnosisConfiguration {
    DiagnosisConfiguration {
        attenuation_risk_values: configuration.attenuation_scores.clone(),
        days_after_contacted_risk_values: configuration.days_since_last_exposure_scores.clone(),
        duration_risk_values: configuration.duration_scores.clone(),
        initial_risk_level_risk_values: configuration.transmission_risk_scores.clone(),
        attenuation_duration_thresholds: configuration.duration_at_attenuation_thresholds.clone(),
        minimum_risk_value_threshold: configuration.minimum_risk_score,
    }
}
