//! In-memory dispatcher that records calls for assertions.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::traits::{ActionDispatcher, DispatchError};
use crate::types::ActionCall;

/// Recording dispatcher for tests; no host, no network.
///
/// Clones share the same call log, so a test can hand one clone to the
/// controller and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockDispatcher {
    calls: Arc<Mutex<Vec<ActionCall>>>,
    closed: Arc<AtomicBool>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call dispatched so far, in order.
    pub fn calls(&self) -> Vec<ActionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drain the call log.
    pub fn take_calls(&self) -> Vec<ActionCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    /// Simulate a torn-down host channel; subsequent dispatches fail.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ActionDispatcher for MockDispatcher {
    async fn dispatch(&self, call: ActionCall) -> Result<(), DispatchError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(DispatchError::ChannelClosed);
        }
        debug!(%call, "mock dispatch");
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}
