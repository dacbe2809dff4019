//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an env filter and a plain or
//! JSON formatter.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_tracing};
