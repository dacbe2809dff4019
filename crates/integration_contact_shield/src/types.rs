//! Contact Shield engine record types
//!
//! These mirror the shapes the engine hands back and accepts. Canonical
//! conversions live in the mapper modules; nothing here is interpreted.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cause reported by the engine's failure callback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine status {status_code}: {message}")]
pub struct EngineFailure {
    /// Status code reported by the engine
    pub status_code: i32,
    /// Human-readable description
    pub message: String,
}

impl EngineFailure {
    /// Create a failure with a status code and message
    #[must_use]
    pub fn new(status_code: i32, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

/// A key the engine generated for broadcasting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicKey {
    /// Raw key material
    pub content: Vec<u8>,
    /// First 10-minute interval the key is valid in
    pub periodic_key_valid_time: i64,
    /// Number of intervals the key is valid for
    pub periodic_key_life_time: i64,
    /// Risk level attached when the key was generated
    pub initial_risk_level: i32,
}

/// Risk scoring parameters in the engine's positional layout
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosisConfiguration {
    /// Risk values per attenuation bucket
    pub attenuation_risk_values: Vec<i32>,
    /// Risk values per days-after-contact bucket
    pub days_after_contacted_risk_values: Vec<i32>,
    /// Risk values per duration bucket
    pub duration_risk_values: Vec<i32>,
    /// Risk values per initial risk level
    pub initial_risk_level_risk_values: Vec<i32>,
    /// Attenuation thresholds splitting the duration buckets
    pub attenuation_duration_thresholds: Vec<i32>,
    /// Minimum risk value for a hit to be reported
    pub minimum_risk_value_threshold: i32,
}

/// Aggregate hit report for a token
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSketch {
    /// Days since the latest hit
    pub days_since_last_hit: i32,
    /// Number of matched keys
    pub number_of_hits: i32,
    /// Highest risk value
    pub max_risk_value: i32,
    /// Sum of all risk values
    pub summation_risk_value: i32,
    /// Minutes per attenuation bucket, high first
    pub attenuation_durations: Vec<i32>,
}

/// Detail for one hit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetail {
    /// Day of the hit in epoch milliseconds
    pub day_number: i64,
    /// Duration of the contact in minutes
    pub duration_minutes: i32,
    /// Attenuation risk value
    pub attenuation_risk_value: i32,
    /// Initial risk level of the matched key
    pub initial_risk_level: i32,
    /// Total risk value
    pub total_risk_value: i32,
    /// Minutes per attenuation bucket, high first
    pub attenuation_durations: Vec<i32>,
}

/// Cross-process notification target registered with the engine
///
/// Supplied once by the host and handed to the engine unchanged on every
/// submission. This crate never looks inside.
#[derive(Clone)]
pub struct CallbackHandle(Arc<dyn Any + Send + Sync>);

impl CallbackHandle {
    /// Wrap a host-specific target
    #[must_use]
    pub fn new<T: Any + Send + Sync>(target: T) -> Self {
        Self(Arc::new(target))
    }

    /// Borrow the target as its concrete type, for engine implementations
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether two handles refer to the same target
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHandle").finish_non_exhaustive()
    }
}
