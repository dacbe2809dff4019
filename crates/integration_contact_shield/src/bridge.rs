//! Callback-to-future bridge
//!
//! Each engine call gets one [`Completion`] (handed to the engine) and one
//! [`Settlement`] (awaited by the caller) sharing a oneshot channel. The
//! sender sits in an `Option` and is taken by whichever callback fires
//! first, so the outcome is assigned exactly once.
//!
//! There is no timeout. Dropping the awaiting future does not retract a call
//! the engine has already accepted; the engine's eventual callback is then
//! discarded.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::engine::ContactShieldEngine;
use crate::error::ContactShieldError;
use crate::types::EngineFailure;

type Outcome<T> = Result<T, EngineFailure>;

/// Completion handle the engine settles through success or failure
pub struct Completion<T> {
    operation: &'static str,
    sender: Arc<Mutex<Option<oneshot::Sender<Outcome<T>>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("operation", &self.operation)
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl<T> Completion<T> {
    /// Success path
    ///
    /// Returns `true` if this call settled the result, `false` if it was
    /// already settled.
    pub fn succeed(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Failure path, preserving the engine's cause
    ///
    /// Returns `true` if this call settled the result, `false` if it was
    /// already settled.
    pub fn fail(&self, failure: EngineFailure) -> bool {
        self.settle(Err(failure))
    }

    /// Whether either path has fired
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// Engine operation this completion belongs to
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    fn settle(&self, outcome: Outcome<T>) -> bool {
        let Some(sender) = self.sender.lock().take() else {
            warn!(
                operation = self.operation,
                succeeded = outcome.is_ok(),
                "Ignoring completion for an already settled engine call"
            );
            return false;
        };

        if sender.send(outcome).is_err() {
            debug!(
                operation = self.operation,
                "Caller stopped waiting before the engine call settled"
            );
        }
        true
    }
}

/// Caller side of a pending engine call
#[derive(Debug)]
pub struct Settlement<T> {
    operation: &'static str,
    receiver: oneshot::Receiver<Outcome<T>>,
}

impl<T> Settlement<T> {
    /// Suspend until the engine settles the call
    ///
    /// # Errors
    ///
    /// Returns `ContactShieldError::Engine` if the failure path fired and
    /// `ContactShieldError::Abandoned` if every completion handle was dropped
    /// unsettled.
    pub async fn wait(self) -> Result<T, ContactShieldError> {
        match self.receiver.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(failure)) => Err(ContactShieldError::engine(self.operation, failure)),
            Err(_) => Err(ContactShieldError::Abandoned {
                operation: self.operation,
            }),
        }
    }
}

/// Create a linked completion/settlement pair for one engine call
#[must_use]
pub fn pending<T>(operation: &'static str) -> (Completion<T>, Settlement<T>) {
    let (tx, rx) = oneshot::channel();
    let completion = Completion {
        operation,
        sender: Arc::new(Mutex::new(Some(tx))),
    };
    let settlement = Settlement {
        operation,
        receiver: rx,
    };
    (completion, settlement)
}

/// Dispatch one engine call off the caller's task and await its outcome
///
/// `dispatch` runs on the blocking pool with a fresh [`Completion`]. If it
/// panics or drops the completion unsettled, the caller receives
/// `ContactShieldError::Abandoned`.
pub async fn call_engine<T, F>(
    engine: &Arc<dyn ContactShieldEngine>,
    operation: &'static str,
    dispatch: F,
) -> Result<T, ContactShieldError>
where
    T: Send + 'static,
    F: FnOnce(&dyn ContactShieldEngine, Completion<T>) + Send + 'static,
{
    let (completion, settlement) = pending(operation);
    let engine = Arc::clone(engine);

    debug!(operation, "Dispatching engine call");
    // Detached: the call keeps running even if the caller stops waiting.
    drop(tokio::task::spawn_blocking(move || {
        dispatch(engine.as_ref(), completion);
    }));

    settlement.wait().await
}
