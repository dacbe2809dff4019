//! Domain layer for the exposure backend
//!
//! Contains the canonical, vendor-independent records exchanged with an
//! exposure-matching backend: keys, risk configuration and match results.
//! Nothing here knows which vendor engine produced or consumes them.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
