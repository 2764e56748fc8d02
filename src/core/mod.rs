//! The pure functional core of the controller.
//!
//! Everything here is free of side effects:
//! - Operation state and status via [`OperationState`] and [`Status`]
//! - Lifecycle events via [`Event`] and [`EventKind`]
//! - The transition engine, [`OperationState::apply`]
//! - Immutable status-change history via [`TransitionLog`]
//!
//! The imperative shell lives in [`crate::controller`] and
//! [`crate::lifecycle`].

mod event;
mod log;
mod state;
mod transition;

pub use event::{Event, EventKind, UnrecognizedEventError};
pub use log::{StatusChange, TransitionLog};
pub use state::{OperationState, Status};
