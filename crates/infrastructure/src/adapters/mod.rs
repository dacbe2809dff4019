//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod contact_shield_adapter;

pub use contact_shield_adapter::ContactShieldAdapter;
