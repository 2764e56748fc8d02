//! Operation status and the state record it lives in.
//!
//! `OperationState` is the single entity the crate manages. Its fields are
//! private: reads go through accessors, writes only through the transition
//! engine, so the payload invariants cannot be broken from outside.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle position of a single asynchronous operation.
///
/// `Idle` is the only initial status. There is no terminal status: a settled
/// operation can always be re-run, which moves it back to `Pending`.
///
/// # Example
///
/// ```rust
/// use inflight::core::Status;
///
/// assert_eq!(Status::Idle.name(), "idle");
/// assert!(!Status::Pending.is_settled());
/// assert!(Status::Resolved.is_settled());
/// assert!(Status::Rejected.is_rejected());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No operation has been issued yet.
    Idle,
    /// An operation has been issued and has not settled.
    Pending,
    /// The most recent settlement was a success.
    Resolved,
    /// The most recent settlement was a failure.
    Rejected,
}

impl Status {
    /// Get the status name for display/serialization.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Check whether an operation has settled (successfully or not).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// Check whether the settlement was a failure.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of one asynchronous operation's lifecycle.
///
/// Exactly one of `{data present, error present, neither}` holds at any time:
/// `data` is populated only when `status` is [`Status::Resolved`], `error`
/// only when `status` is [`Status::Rejected`].
///
/// # Example
///
/// ```rust
/// use inflight::core::{OperationState, Status};
///
/// let state: OperationState<u32, String> = OperationState::idle();
/// assert_eq!(state.status(), Status::Idle);
/// assert_eq!(state.data(), None);
/// assert_eq!(state.error(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, E: Serialize",
    deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct OperationState<T, E> {
    status: Status,
    data: Option<T>,
    error: Option<E>,
}

impl<T, E> OperationState<T, E> {
    /// Create the initial state: idle, no data, no error.
    pub fn idle() -> Self {
        Self {
            status: Status::Idle,
            data: None,
            error: None,
        }
    }

    /// Assemble a state from validated parts.
    ///
    /// Crate-internal: the builder and the transition engine are the only
    /// call sites, and both uphold the payload invariants.
    pub(crate) fn from_parts(status: Status, data: Option<T>, error: Option<E>) -> Self {
        debug_assert!(data.is_none() || error.is_none());
        Self {
            status,
            data,
            error,
        }
    }

    /// Current lifecycle position.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Success payload, present only while `status` is `Resolved`.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Failure payload, present only while `status` is `Rejected`.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }
}

impl<T, E> Default for OperationState<T, E> {
    fn default() -> Self {
        Self::idle()
    }
}
