//! Per-event view of a match

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exposure_summary::AttenuationDurations;

/// One matched exposure event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureInformation {
    /// Day of the exposure, milliseconds since the Unix epoch
    pub date_millis_since_epoch: i64,
    /// Length of the exposure in minutes
    pub duration_minutes: i32,
    /// Weighted attenuation value reported by the engine
    pub attenuation_value: i32,
    /// Transmission risk level of the matched key
    pub transmission_risk_level: i32,
    /// Risk score computed for this event
    pub total_risk_score: i32,
    /// Minutes per attenuation bucket
    pub attenuation_durations: AttenuationDurations,
}

impl ExposureInformation {
    /// Exposure day as a UTC timestamp, `None` if out of range
    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_millis_since_epoch)
    }
}
