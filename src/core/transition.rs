//! The transition engine: a pure function from `(state, event)` to the next
//! state.
//!
//! The engine is total over the three recognized events and independent of
//! the current state: every event names its destination unconditionally.
//! Identical inputs always produce identical outputs; there is no I/O and no
//! side effect. Unrecognized events cannot reach the engine at all — the
//! closed [`Event`](crate::core::Event) enum rules them out at compile time,
//! and the tag-parsing boundary in [`crate::core::event`] rejects them before
//! they become events.

use super::event::Event;
use super::state::{OperationState, Status};

impl<T, E> OperationState<T, E> {
    /// Compute the state after `event`.
    ///
    /// | event | next status | next data/error |
    /// |---|---|---|
    /// | `Started` | `Pending` | none / none |
    /// | `Succeeded(data)` | `Resolved` | data / none |
    /// | `Failed(error)` | `Rejected` | none / error |
    ///
    /// # Example
    ///
    /// ```rust
    /// use inflight::core::{Event, OperationState, Status};
    ///
    /// let idle: OperationState<u32, String> = OperationState::idle();
    ///
    /// let pending = idle.apply(Event::Started);
    /// assert_eq!(pending.status(), Status::Pending);
    ///
    /// let resolved = pending.apply(Event::Succeeded(42));
    /// assert_eq!(resolved.status(), Status::Resolved);
    /// assert_eq!(resolved.data(), Some(&42));
    ///
    /// // Settled states are not terminal: a re-run moves back to pending.
    /// let rerun = resolved.apply(Event::Started);
    /// assert_eq!(rerun.status(), Status::Pending);
    /// assert_eq!(rerun.data(), None);
    /// ```
    pub fn apply(&self, event: Event<T, E>) -> OperationState<T, E> {
        match event {
            Event::Started => OperationState::from_parts(Status::Pending, None, None),
            Event::Succeeded(data) => {
                OperationState::from_parts(Status::Resolved, Some(data), None)
            }
            Event::Failed(error) => {
                OperationState::from_parts(Status::Rejected, None, Some(error))
            }
        }
    }
}
