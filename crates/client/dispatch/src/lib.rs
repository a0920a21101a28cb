//! Boundary between the plugin core and the host's action executor.
//!
//! The core validates eligibility locally, builds an [`ActionCall`], and
//! hands it to an [`ActionDispatcher`]. Dispatch is fire-and-forget: the
//! remote action processor is the source of truth once a call leaves the
//! plugin, so there is no confirmation, retry, or rollback here.
pub mod mock;
pub mod traits;
pub mod types;

pub use mock::MockDispatcher;
pub use traits::{ActionDispatcher, DispatchError};
pub use types::{ActionArg, ActionCall, actions};
