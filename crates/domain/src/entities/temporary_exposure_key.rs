//! Temporary exposure key entity

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::rolling_interval::is_day_aligned;
use crate::value_objects::{INTERVALS_PER_DAY, TransmissionRiskLevel};

/// A key the device broadcast during one rolling window
///
/// The start interval is always day-aligned and the period never exceeds
/// one day. Both are checked on construction; the fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTemporaryExposureKey")]
pub struct TemporaryExposureKey {
    key_data: String,
    rolling_start_interval_number: u32,
    rolling_period: u32,
    transmission_risk_level: TransmissionRiskLevel,
}

impl TemporaryExposureKey {
    /// Create a key from already-encoded key data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the key data is empty, the
    /// start interval is not day-aligned, or the period exceeds one day.
    pub fn new(
        key_data: impl Into<String>,
        rolling_start_interval_number: u32,
        rolling_period: u32,
        transmission_risk_level: TransmissionRiskLevel,
    ) -> Result<Self, DomainError> {
        let key_data = key_data.into();
        if key_data.is_empty() {
            return Err(DomainError::ValidationError(
                "key data must not be empty".to_string(),
            ));
        }
        if !is_day_aligned(rolling_start_interval_number) {
            return Err(DomainError::ValidationError(format!(
                "rolling start interval {rolling_start_interval_number} is not a multiple of {INTERVALS_PER_DAY}"
            )));
        }
        if rolling_period > INTERVALS_PER_DAY {
            return Err(DomainError::ValidationError(format!(
                "rolling period {rolling_period} exceeds {INTERVALS_PER_DAY}"
            )));
        }

        Ok(Self {
            key_data,
            rolling_start_interval_number,
            rolling_period,
            transmission_risk_level,
        })
    }

    /// Base64 encoded key material
    #[must_use]
    pub fn key_data(&self) -> &str {
        &self.key_data
    }

    /// First 10-minute interval of the key's validity, day-aligned
    #[must_use]
    pub const fn rolling_start_interval_number(&self) -> u32 {
        self.rolling_start_interval_number
    }

    /// Number of intervals the key stays valid for (0-144)
    #[must_use]
    pub const fn rolling_period(&self) -> u32 {
        self.rolling_period
    }

    /// Risk level attached by the device
    #[must_use]
    pub const fn transmission_risk_level(&self) -> TransmissionRiskLevel {
        self.transmission_risk_level
    }
}

/// Unchecked wire shape, validated through [`TemporaryExposureKey::new`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemporaryExposureKey {
    key_data: String,
    rolling_start_interval_number: u32,
    rolling_period: u32,
    transmission_risk_level: TransmissionRiskLevel,
}

impl TryFrom<RawTemporaryExposureKey> for TemporaryExposureKey {
    type Error = DomainError;

    fn try_from(raw: RawTemporaryExposureKey) -> Result<Self, Self::Error> {
        Self::new(
            raw.key_data,
            raw.rolling_start_interval_number,
            raw.rolling_period,
            raw.transmission_risk_level,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_aligned_key() {
        let key =
            TemporaryExposureKey::new("AAECAw==", 2_653_920, 144, TransmissionRiskLevel::Medium)
                .unwrap();
        assert_eq!(key.key_data(), "AAECAw==");
        assert_eq!(key.rolling_start_interval_number(), 2_653_920);
        assert_eq!(key.rolling_period(), 144);
        assert_eq!(key.transmission_risk_level(), TransmissionRiskLevel::Medium);
    }

    #[test]
    fn rejects_unaligned_start() {
        let result = TemporaryExposureKey::new("AAEC", 150, 10, TransmissionRiskLevel::Low);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn rejects_period_longer_than_a_day() {
        let result = TemporaryExposureKey::new("AAEC", 144, 145, TransmissionRiskLevel::Low);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_key_data() {
        let result = TemporaryExposureKey::new("", 0, 1, TransmissionRiskLevel::Low);
        assert!(result.is_err());
    }

    #[test]
    fn zero_period_is_allowed() {
        assert!(TemporaryExposureKey::new("AAEC", 0, 0, TransmissionRiskLevel::Invalid).is_ok());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let key = TemporaryExposureKey::new("AAEC", 288, 26, TransmissionRiskLevel::High).unwrap();
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["keyData"], "AAEC");
        assert_eq!(json["rollingStartIntervalNumber"], 288);
        assert_eq!(json["rollingPeriod"], 26);
        assert_eq!(json["transmissionRiskLevel"], "high");
    }

    #[test]
    fn deserialization_enforces_alignment() {
        let json = r#"{"keyData":"AAEC","rollingStartIntervalNumber":150,"rollingPeriod":1,"transmissionRiskLevel":"low"}"#;
        assert!(serde_json::from_str::<TemporaryExposureKey>(json).is_err());
    }
}
