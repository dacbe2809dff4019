//! Match result mappers
//!
//! Field renames only. The attenuation duration array is read positionally
//! as high/medium/low; anything after the third element is ignored and a
//! missing bucket reads as zero.

use domain::{AttenuationDurations, ExposureInformation, ExposureSummary};

use crate::types::{ContactDetail, ContactSketch};

fn attenuation_durations(values: &[i32]) -> AttenuationDurations {
    let bucket = |index: usize| values.get(index).copied().unwrap_or_default();
    AttenuationDurations::new(bucket(0), bucket(1), bucket(2))
}

/// Translate the engine's aggregate report
#[must_use]
pub fn exposure_summary(sketch: &ContactSketch) -> ExposureSummary {
    ExposureSummary {
        days_since_last_exposure: sketch.days_since_last_hit,
        matched_key_count: sketch.number_of_hits,
        maximum_risk_score: sketch.max_risk_value,
        attenuation_durations: attenuation_durations(&sketch.attenuation_durations),
        summation_risk_score: sketch.summation_risk_value,
    }
}

/// Translate one hit detail
#[must_use]
pub fn exposure_information(detail: &ContactDetail) -> ExposureInformation {
    ExposureInformation {
        date_millis_since_epoch: detail.day_number,
        duration_minutes: detail.duration_minutes,
        attenuation_value: detail.attenuation_risk_value,
        transmission_risk_level: detail.initial_risk_level,
        total_risk_score: detail.total_risk_value,
        attenuation_durations: attenuation_durations(&detail.attenuation_durations),
    }
}

/// Translate all hit details, keeping their order
#[must_use]
pub fn exposure_information_list(details: &[ContactDetail]) -> Vec<ExposureInformation> {
    details.iter().map(exposure_information).collect()
}
