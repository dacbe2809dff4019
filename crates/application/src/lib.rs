//! Application layer - Port definitions and the canonical error taxonomy
//!
//! Backends for exposure matching are adapters behind
//! [`ExposureNotificationPort`]; the orchestrator depends only on this crate
//! and `domain`.

pub mod error;
pub mod ports;

pub use error::ApplicationError;
pub use ports::*;
