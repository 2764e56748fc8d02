//! Inflight: lifecycle-aware state tracking for a single in-flight
//! asynchronous operation.
//!
//! The crate follows a "pure core, imperative shell" split. The core is a
//! four-status state machine (`idle`, `pending`, `resolved`, `rejected`)
//! driven by a pure transition engine; the shell is a [`Controller`] that
//! launches operations and routes every state write through a lifecycle
//! guard, so that nothing mutates the state after the owning scope has been
//! retired — even when an operation settles late.
//!
//! # Core Concepts
//!
//! - **OperationState**: status plus at most one payload (success data or
//!   failure error), mutated only by the transition engine
//! - **Lifecycle guard**: an owned one-way flag; emissions after retirement
//!   are dropped silently
//! - **Controller**: the façade tying both together behind `run`
//!
//! # Example
//!
//! ```rust
//! use inflight::{Controller, Status};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller: Controller<u32, String> = Controller::new();
//!
//! // `run` emits `started` synchronously and hands back a driver future.
//! let driver = controller.run(async { Ok(42) });
//! assert_eq!(controller.status(), Status::Pending);
//!
//! driver.await;
//! assert_eq!(controller.state().data(), Some(&42));
//!
//! // After retirement, late settlements can no longer touch the state.
//! controller.retire();
//! # }
//! ```

pub mod controller;
pub mod core;
pub mod lifecycle;

// Re-export commonly used types
pub use crate::controller::{BuildError, Controller, ControllerBuilder};
pub use crate::core::{
    Event, EventKind, OperationState, Status, StatusChange, TransitionLog, UnrecognizedEventError,
};
pub use crate::lifecycle::{GuardedDispatch, Scope};
