//! Transmission risk level value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Risk of transmission attached to a temporary exposure key
///
/// The canonical range is fixed at 0-8:
/// - 0: invalid / unset
/// - 1-8: lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionRiskLevel {
    /// Level 0 - no risk information
    #[default]
    Invalid,
    /// Level 1
    Lowest,
    /// Level 2
    Low,
    /// Level 3
    LowMedium,
    /// Level 4
    Medium,
    /// Level 5
    MediumHigh,
    /// Level 6
    High,
    /// Level 7
    VeryHigh,
    /// Level 8
    Highest,
}

impl TransmissionRiskLevel {
    /// Lowest integer value in the canonical range
    pub const MIN_VALUE: i32 = 0;

    /// Highest integer value in the canonical range
    pub const MAX_VALUE: i32 = 8;

    /// Convert from the integer encoding (0-8)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for values outside 0-8.
    pub fn from_value(value: i32) -> Result<Self, DomainError> {
        let level = match value {
            0 => Self::Invalid,
            1 => Self::Lowest,
            2 => Self::Low,
            3 => Self::LowMedium,
            4 => Self::Medium,
            5 => Self::MediumHigh,
            6 => Self::High,
            7 => Self::VeryHigh,
            8 => Self::Highest,
            other => {
                return Err(DomainError::ValidationError(format!(
                    "transmission risk level {other} outside {}..={}",
                    Self::MIN_VALUE,
                    Self::MAX_VALUE
                )));
            },
        };
        Ok(level)
    }

    /// Integer encoding of this level
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Invalid => 0,
            Self::Lowest => 1,
            Self::Low => 2,
            Self::LowMedium => 3,
            Self::Medium => 4,
            Self::MediumHigh => 5,
            Self::High => 6,
            Self::VeryHigh => 7,
            Self::Highest => 8,
        }
    }

    /// All levels in ascending order
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Invalid,
            Self::Lowest,
            Self::Low,
            Self::LowMedium,
            Self::Medium,
            Self::MediumHigh,
            Self::High,
            Self::VeryHigh,
            Self::Highest,
        ]
    }
}

impl fmt::Display for TransmissionRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i32> for TransmissionRiskLevel {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<TransmissionRiskLevel> for i32 {
    fn from(level: TransmissionRiskLevel) -> Self {
        level.value()
    }
}
