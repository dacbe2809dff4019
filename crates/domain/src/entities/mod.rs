//! Domain entities - canonical records exchanged with the exposure backend

mod exposure_configuration;
mod exposure_information;
mod exposure_summary;
mod temporary_exposure_key;

pub use exposure_configuration::ExposureConfiguration;
pub use exposure_information::ExposureInformation;
pub use exposure_summary::{AttenuationDurations, ExposureSummary};
pub use temporary_exposure_key::TemporaryExposureKey;
