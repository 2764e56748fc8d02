//! Builder for constructing controllers with a seeded initial state.
//!
//! A caller that already knows an operation is about to start can seed
//! `Status::Pending` to avoid an idle flash; a caller replaying a known
//! outcome can seed a payload. Seeds are validated against the payload
//! invariants before the controller exists.

use crate::controller::Controller;
use crate::core::{OperationState, Status};
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("data and error cannot both be seeded; at most one payload may be present")]
    ConflictingPayloads,

    #[error("seeded data requires status 'resolved', got '{status}'")]
    DataRequiresResolved { status: Status },

    #[error("seeded error requires status 'rejected', got '{status}'")]
    ErrorRequiresRejected { status: Status },
}

/// Builder for a [`Controller`] with initial-state overrides.
///
/// # Example
///
/// ```rust
/// use inflight::{Controller, Status};
///
/// // Seed pending so a consumer that kicks off a run immediately never
/// // observes idle.
/// let controller: Controller<u32, String> = Controller::builder()
///     .status(Status::Pending)
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.status(), Status::Pending);
/// assert_eq!(controller.state().data(), None);
/// ```
pub struct ControllerBuilder<T, E> {
    status: Option<Status>,
    data: Option<T>,
    error: Option<E>,
}

impl<T, E> ControllerBuilder<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Create a builder with no overrides. Building it yields an idle
    /// controller.
    pub fn new() -> Self {
        Self {
            status: None,
            data: None,
            error: None,
        }
    }

    /// Override the initial status.
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Seed a success payload. Implies `Status::Resolved` unless a
    /// conflicting status was set explicitly.
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Seed a failure payload. Implies `Status::Rejected` unless a
    /// conflicting status was set explicitly.
    pub fn error(mut self, error: E) -> Self {
        self.error = Some(error);
        self
    }

    /// Build the controller, validating the seeds against the payload
    /// invariants.
    pub fn build(self) -> Result<Controller<T, E>, BuildError> {
        if self.data.is_some() && self.error.is_some() {
            return Err(BuildError::ConflictingPayloads);
        }

        let status = if self.data.is_some() {
            match self.status {
                None | Some(Status::Resolved) => Status::Resolved,
                Some(status) => return Err(BuildError::DataRequiresResolved { status }),
            }
        } else if self.error.is_some() {
            match self.status {
                None | Some(Status::Rejected) => Status::Rejected,
                Some(status) => return Err(BuildError::ErrorRequiresRejected { status }),
            }
        } else {
            self.status.unwrap_or(Status::Idle)
        };

        Ok(Controller::from_initial(OperationState::from_parts(
            status, self.data, self.error,
        )))
    }
}

impl<T, E> Default for ControllerBuilder<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
