//! Value Objects - Immutable, identity-less domain primitives

mod diagnosis_key_file;
pub mod rolling_interval;
mod transmission_risk_level;

pub use diagnosis_key_file::DiagnosisKeyFile;
pub use rolling_interval::INTERVALS_PER_DAY;
pub use transmission_risk_level::TransmissionRiskLevel;
