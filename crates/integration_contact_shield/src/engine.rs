//! Port onto the vendor matching engine
//!
//! The engine is a black box with a callback-only API: every method returns
//! immediately and later settles the supplied [`Completion`] through exactly
//! one of its two paths.

use std::path::PathBuf;

use crate::bridge::Completion;
use crate::types::{
    CallbackHandle, ContactDetail, ContactSketch, DiagnosisConfiguration, PeriodicKey,
};

/// Callback-based Contact Shield engine API
///
/// Implementations wrap the platform SDK. Methods are invoked from a
/// blocking-pool thread and may block briefly while handing work over.
pub trait ContactShieldEngine: Send + Sync {
    /// Start broadcasting and scanning
    fn start_contact_shield(&self, completion: Completion<()>);

    /// Stop broadcasting and scanning
    fn stop_contact_shield(&self, completion: Completion<()>);

    /// Report whether the engine is running
    fn is_contact_shield_running(&self, completion: Completion<bool>);

    /// Report the keys this device has broadcast
    fn get_periodic_key(&self, completion: Completion<Vec<PeriodicKey>>);

    /// Submit verified diagnosis key files for matching under `token`
    fn put_shared_key_files(
        &self,
        callback: CallbackHandle,
        files: Vec<PathBuf>,
        configuration: DiagnosisConfiguration,
        token: String,
        completion: Completion<()>,
    );

    /// Report the aggregate hit summary for `token`
    fn get_contact_sketch(&self, token: String, completion: Completion<ContactSketch>);

    /// Report per-hit details for `token`
    fn get_contact_detail(&self, token: String, completion: Completion<Vec<ContactDetail>>);
}
