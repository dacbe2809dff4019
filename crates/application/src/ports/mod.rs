//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod exposure_notification_port;

pub use exposure_notification_port::{ExposureBackendKind, ExposureNotificationPort};
#[cfg(test)]
pub use exposure_notification_port::MockExposureNotificationPort;
