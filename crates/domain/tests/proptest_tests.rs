//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::rolling_interval::{day_first_interval, is_day_aligned};
use domain::{INTERVALS_PER_DAY, TemporaryExposureKey, TransmissionRiskLevel};
use proptest::prelude::*;

// ============================================================================
// Rolling Interval Property Tests
// ============================================================================

mod rolling_interval_tests {
    use super::*;

    proptest! {
        #[test]
        fn day_first_interval_is_aligned(interval in 0i64..=i64::from(u32::MAX)) {
            let first = day_first_interval(interval);
            prop_assert_eq!(first % i64::from(INTERVALS_PER_DAY), 0);
            prop_assert!(first <= interval);
            prop_assert!(interval - first < i64::from(INTERVALS_PER_DAY));
        }

        #[test]
        fn alignment_matches_modulo(interval in any::<u32>()) {
            prop_assert_eq!(is_day_aligned(interval), interval % INTERVALS_PER_DAY == 0);
        }
    }
}

// ============================================================================
// Transmission Risk Level Property Tests
// ============================================================================

mod risk_level_tests {
    use super::*;

    proptest! {
        #[test]
        fn in_range_values_round_trip(value in 0i32..=8) {
            let level = TransmissionRiskLevel::try_from(value).unwrap();
            prop_assert_eq!(level.value(), value);
        }

        #[test]
        fn out_of_range_values_rejected(
            value in prop_oneof![(i32::MIN..0i32), (9i32..i32::MAX)]
        ) {
            prop_assert!(TransmissionRiskLevel::try_from(value).is_err());
        }
    }
}

// ============================================================================
// Temporary Exposure Key Property Tests
// ============================================================================

mod temporary_exposure_key_tests {
    use super::*;

    proptest! {
        #[test]
        fn aligned_keys_are_accepted(day in 0u32..20_000, period in 0u32..=144) {
            let start = day * INTERVALS_PER_DAY;
            let key = TemporaryExposureKey::new("AAEC", start, period, TransmissionRiskLevel::Low);
            prop_assert!(key.is_ok());
        }

        #[test]
        fn unaligned_keys_are_rejected(day in 0u32..20_000, offset in 1u32..144) {
            let start = day * INTERVALS_PER_DAY + offset;
            let key = TemporaryExposureKey::new("AAEC", start, 1, TransmissionRiskLevel::Low);
            prop_assert!(key.is_err());
        }
    }
}
