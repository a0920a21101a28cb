//! Action-dispatch trait and its transport-level errors.
use async_trait::async_trait;

use crate::types::ActionCall;

/// Transport-side failures.
///
/// Eligibility is never enforced at this layer: a call that reaches the
/// dispatcher already passed the core's local checks, and legality of the
/// action itself is judged by the remote processor.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("dispatch channel closed")]
    ChannelClosed,

    #[error("dispatch rejected by host: {0}")]
    Rejected(String),
}

/// Forwards validated action calls to the host for execution.
///
/// Fire-and-forget: a successful return means the call was handed off, not
/// that the action executed. Callers never retry, await confirmation, or
/// roll back local state on failure.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    async fn dispatch(&self, call: ActionCall) -> Result<(), DispatchError>;
}
