//! Contact Shield engine integration
//!
//! Wraps the vendor's callback-based exposure-matching engine and
//! reconciles its conventions with the canonical records in `domain`:
//!
//! - `bridge` turns success/failure callbacks into one awaited result
//! - `key_normalizer` day-aligns periodic keys and clamps their period
//! - `configuration_mapper` lays out risk weights positionally
//! - `verifier` gates diagnosis key files before submission
//! - `mappers` rename match results into summary/information records
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐  Completion<T>   ┌──────────────────────┐
//! │ ContactShieldClient  │ ───────────────► │ ContactShieldEngine  │
//! │    (This crate)      │ ◄─ succeed/fail ─│   (vendor SDK)       │
//! └──────────────────────┘                  └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use integration_contact_shield::{CallbackHandle, ContactShieldClient, ContactShieldConfig};
//!
//! let client = ContactShieldClient::new(
//!     engine,
//!     verifier,
//!     CallbackHandle::new(pending_intent),
//!     &ContactShieldConfig::new("com.example.tracing"),
//! )?;
//!
//! client.start().await?;
//! let keys = client.temporary_exposure_key_history().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bridge;
mod client;
mod config;
pub mod configuration_mapper;
mod engine;
mod error;
pub mod key_normalizer;
pub mod mappers;
mod types;
pub mod verifier;

pub use bridge::{Completion, Settlement, call_engine, pending};
pub use client::ContactShieldClient;
pub use config::ContactShieldConfig;
pub use engine::ContactShieldEngine;
pub use error::ContactShieldError;
pub use types::{
    CallbackHandle, ContactDetail, ContactSketch, DiagnosisConfiguration, EngineFailure,
    PeriodicKey,
};
pub use verifier::{DiagnosisKeyGate, KeyFileVerifier, VerificationError};
