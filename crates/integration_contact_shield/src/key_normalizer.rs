//! Periodic key normalization
//!
//! The engine reports the exact interval a key became valid in. The
//! canonical form is day-granular: the start is moved back to the first
//! interval of its day and the period is measured from there, clamped so
//! it never runs into the next day.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use domain::value_objects::rolling_interval::day_first_interval;
use domain::{INTERVALS_PER_DAY, TemporaryExposureKey, TransmissionRiskLevel};
use tracing::{debug, warn};

use crate::error::ContactShieldError;
use crate::types::PeriodicKey;

/// Convert one engine key into its canonical form
///
/// A key whose life time would carry it past midnight is truncated to the
/// remainder of its start day.
///
/// # Errors
///
/// Returns `ContactShieldError::MalformedKey` for empty content, negative
/// interval values, a risk level outside 0-8, or a start interval that does
/// not fit the canonical range.
pub fn normalize_periodic_key(
    key: &PeriodicKey,
) -> Result<TemporaryExposureKey, ContactShieldError> {
    if key.content.is_empty() {
        return Err(ContactShieldError::malformed_key("empty key content"));
    }
    if key.periodic_key_valid_time < 0 {
        return Err(ContactShieldError::malformed_key(format!(
            "negative valid time {}",
            key.periodic_key_valid_time
        )));
    }
    if key.periodic_key_life_time < 0 {
        return Err(ContactShieldError::malformed_key(format!(
            "negative life time {}",
            key.periodic_key_life_time
        )));
    }

    let risk_level = TransmissionRiskLevel::try_from(key.initial_risk_level)
        .map_err(|e| ContactShieldError::malformed_key(e.to_string()))?;

    let day_first = day_first_interval(key.periodic_key_valid_time);
    let rolling_start = u32::try_from(day_first).map_err(|_| {
        ContactShieldError::malformed_key(format!("valid time {day_first} out of range"))
    })?;

    let window_end = key
        .periodic_key_valid_time
        .saturating_add(key.periodic_key_life_time);
    let rolling_period = window_end
        .saturating_sub(day_first)
        .min(i64::from(INTERVALS_PER_DAY));
    // In [0, 144]: valid time >= day_first and life time >= 0.
    let rolling_period = u32::try_from(rolling_period).map_err(|_| {
        ContactShieldError::malformed_key(format!("rolling period {rolling_period} out of range"))
    })?;

    TemporaryExposureKey::new(
        STANDARD.encode(&key.content),
        rolling_start,
        rolling_period,
        risk_level,
    )
    .map_err(|e| ContactShieldError::malformed_key(e.to_string()))
}

/// Normalize a batch, dropping records that cannot be normalized
///
/// Each record is handled on its own; a malformed one is logged and skipped.
pub fn normalize_periodic_keys(keys: &[PeriodicKey]) -> Vec<TemporaryExposureKey> {
    let normalized: Vec<TemporaryExposureKey> = keys
        .iter()
        .enumerate()
        .filter_map(|(index, key)| match normalize_periodic_key(key) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(index, error = %e, "Dropping periodic key");
                None
            },
        })
        .collect();

    debug!(
        received = keys.len(),
        normalized = normalized.len(),
        "Normalized periodic keys"
    );
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(valid_time: i64, life_time: i64) -> PeriodicKey {
        PeriodicKey {
            content: vec![0, 1, 2, 3],
            periodic_key_valid_time: valid_time,
            periodic_key_life_time: life_time,
            initial_risk_level: 4,
        }
    }

    #[test]
    fn mid_day_key_is_aligned_and_measured_from_midnight() {
        let normalized = normalize_periodic_key(&key(150, 20)).unwrap();
        assert_eq!(normalized.rolling_start_interval_number(), 144);
        assert_eq!(normalized.rolling_period(), 26);
    }

    #[test]
    fn full_day_key_is_unchanged() {
        let normalized = normalize_periodic_key(&key(0, 144)).unwrap();
        assert_eq!(normalized.rolling_start_interval_number(), 0);
        assert_eq!(normalized.rolling_period(), 144);
    }

    #[test]
    fn key_crossing_midnight_is_clamped() {
        let normalized = normalize_periodic_key(&key(200, 144)).unwrap();
        assert_eq!(normalized.rolling_start_interval_number(), 144);
        assert_eq!(normalized.rolling_period(), 144);
    }

    #[test]
    fn multi_day_life_time_is_clamped_to_start_day() {
        let normalized = normalize_periodic_key(&key(2_653_930, 1_000)).unwrap();
        assert_eq!(normalized.rolling_start_interval_number(), 2_653_920);
        assert_eq!(normalized.rolling_period(), 144);
    }

    #[test]
    fn zero_life_time_at_boundary_gives_zero_period() {
        let normalized = normalize_periodic_key(&key(288, 0)).unwrap();
        assert_eq!(normalized.rolling_period(), 0);
    }

    #[test]
    fn content_is_standard_base64() {
        let mut record = key(0, 144);
        record.content = vec![0xfb, 0xff, 0xfe, 0x00, 0x10];
        let normalized = normalize_periodic_key(&record).unwrap();
        assert_eq!(normalized.key_data(), "+//+ABA=");
    }

    #[test]
    fn risk_level_passes_through() {
        let mut record = key(0, 144);
        record.initial_risk_level = 7;
        let normalized = normalize_periodic_key(&record).unwrap();
        assert_eq!(
            normalized.transmission_risk_level(),
            TransmissionRiskLevel::VeryHigh
        );
    }

    #[test]
    fn malformed_records_are_rejected() {
        let mut empty = key(0, 144);
        empty.content.clear();
        assert!(matches!(
            normalize_periodic_key(&empty),
            Err(ContactShieldError::MalformedKey(_))
        ));

        assert!(normalize_periodic_key(&key(-1, 144)).is_err());
        assert!(normalize_periodic_key(&key(0, -1)).is_err());

        let mut risky = key(0, 144);
        risky.initial_risk_level = 9;
        assert!(normalize_periodic_key(&risky).is_err());

        assert!(normalize_periodic_key(&key(i64::MAX, 1)).is_err());
    }

    #[test]
    fn batch_drops_only_malformed_records() {
        let mut bad = key(300, 10);
        bad.initial_risk_level = -3;
        let batch = vec![key(150, 20), bad, key(0, 144)];

        let normalized = normalize_periodic_keys(&batch);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].rolling_start_interval_number(), 144);
        assert_eq!(normalized[1].rolling_start_interval_number(), 0);
    }

    #[test]
    fn empty_batch_is_empty() {
        assert!(normalize_periodic_keys(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn start_is_always_day_aligned(
            valid_time in 0i64..=i64::from(u32::MAX - 144),
            life_time in 0i64..100_000
        ) {
            let normalized = normalize_periodic_key(&key(valid_time, life_time)).unwrap();
            prop_assert_eq!(normalized.rolling_start_interval_number() % INTERVALS_PER_DAY, 0);
        }

        #[test]
        fn period_is_always_within_a_day(
            valid_time in 0i64..=i64::from(u32::MAX - 144),
            life_time in 0i64..100_000
        ) {
            let normalized = normalize_periodic_key(&key(valid_time, life_time)).unwrap();
            prop_assert!(normalized.rolling_period() <= INTERVALS_PER_DAY);
        }
    }
}
