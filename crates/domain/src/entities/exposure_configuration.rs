//! Risk scoring configuration handed to the matching engine

use serde::{Deserialize, Serialize};

/// Canonical risk scoring configuration
///
/// Array lengths are not validated here; the matching engine rejects
/// configurations it cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureConfiguration {
    /// Risk weights per attenuation bucket
    #[serde(default)]
    pub attenuation_scores: Vec<i32>,
    /// Risk weights per days-since-exposure bucket
    #[serde(default)]
    pub days_since_last_exposure_scores: Vec<i32>,
    /// Risk weights per duration bucket
    #[serde(default)]
    pub duration_scores: Vec<i32>,
    /// Risk weights per transmission risk level
    #[serde(default)]
    pub transmission_risk_scores: Vec<i32>,
    /// Two attenuation thresholds (dB) splitting high/medium/low buckets
    #[serde(default)]
    pub duration_at_attenuation_thresholds: Vec<i32>,
    /// Matches scoring below this are discarded
    #[serde(default)]
    pub minimum_risk_score: i32,
}
