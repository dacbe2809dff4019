//! Aggregate view of matches for one submitted key batch

use serde::{Deserialize, Serialize};

/// Minutes of exposure accumulated per attenuation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttenuationDurations {
    /// Minutes at high signal strength (closest contact)
    pub high: i32,
    /// Minutes at medium signal strength
    pub medium: i32,
    /// Minutes at low signal strength
    pub low: i32,
}

impl AttenuationDurations {
    /// Create buckets from explicit values
    #[must_use]
    pub const fn new(high: i32, medium: i32, low: i32) -> Self {
        Self { high, medium, low }
    }

    /// Total minutes across all buckets
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.high.saturating_add(self.medium).saturating_add(self.low)
    }
}

/// Summary of all matches found for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Days since the most recent match
    pub days_since_last_exposure: i32,
    /// Number of diagnosis keys that matched
    pub matched_key_count: i32,
    /// Highest risk score among the matches
    pub maximum_risk_score: i32,
    /// Accumulated minutes per attenuation bucket
    pub attenuation_durations: AttenuationDurations,
    /// Sum of the risk scores of all matches
    pub summation_risk_score: i32,
}

impl ExposureSummary {
    /// Whether any key matched
    #[must_use]
    pub const fn has_matches(&self) -> bool {
        self.matched_key_count > 0
    }
}
