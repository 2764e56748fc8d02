//! The controller façade: the imperative shell around the pure core.
//!
//! A [`Controller`] holds the current [`OperationState`], wires the
//! transition engine behind a lifecycle-guarded dispatch, and exposes
//! [`run`](Controller::run) for launching operations. All state writes flow
//! through the guard; after [`retire`](Controller::retire) the state is
//! frozen, no matter when in-flight operations settle.

mod builder;

pub use builder::{BuildError, ControllerBuilder};

use crate::core::{Event, OperationState, Status, StatusChange, TransitionLog};
use crate::lifecycle::{GuardedDispatch, Scope};
use chrono::Utc;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

struct Shared<T, E> {
    state: Mutex<OperationState<T, E>>,
    log: Mutex<TransitionLog>,
}

/// Tracks the lifecycle of a single in-flight asynchronous operation.
///
/// The controller is a stable handle: clones share the same state, log, and
/// scope, so a consumer holding any clone sees every update and can launch
/// runs through the same machinery for the controller's whole lifetime.
///
/// The controller never fails because the wrapped operation fails — an
/// operation error becomes [`Status::Rejected`] state, handed back to the
/// caller as data.
///
/// # Example
///
/// ```rust
/// use inflight::{Controller, Status};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let controller: Controller<u32, String> = Controller::new();
///
/// let driver = controller.run(async { Ok(42) });
/// assert_eq!(controller.status(), Status::Pending);
///
/// driver.await;
/// assert_eq!(controller.status(), Status::Resolved);
/// assert_eq!(controller.state().data(), Some(&42));
/// # }
/// ```
pub struct Controller<T, E> {
    shared: Arc<Shared<T, E>>,
    dispatch: GuardedDispatch<Event<T, E>>,
    scope: Scope,
}

impl<T, E> Controller<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Create a controller in the idle state.
    pub fn new() -> Self {
        Self::from_initial(OperationState::idle())
    }

    /// Start building a controller with initial-state overrides.
    pub fn builder() -> ControllerBuilder<T, E> {
        ControllerBuilder::new()
    }

    pub(crate) fn from_initial(initial: OperationState<T, E>) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(initial),
            log: Mutex::new(TransitionLog::new()),
        });
        let scope = Scope::new();

        // The raw sink is the only writer: it applies the transition engine
        // and records the change. Lock order is state, then log.
        let sink = Arc::clone(&shared);
        let dispatch = GuardedDispatch::new(scope.clone(), move |event: Event<T, E>| {
            let kind = event.kind();
            let mut state = sink.state.lock().unwrap_or_else(PoisonError::into_inner);
            let next = state.apply(event);
            let change = StatusChange {
                from: state.status(),
                to: next.status(),
                event: kind,
                timestamp: Utc::now(),
            };
            *state = next;
            drop(state);

            let mut log = sink.log.lock().unwrap_or_else(PoisonError::into_inner);
            *log = log.record(change);
        });

        Self {
            shared,
            dispatch,
            scope,
        }
    }

    /// Snapshot of the current operation state.
    pub fn state(&self) -> OperationState<T, E> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current status, without cloning the payloads.
    pub fn status(&self) -> Status {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .status()
    }

    /// Snapshot of the status changes applied so far.
    ///
    /// Events dropped by the lifecycle guard never appear here.
    pub fn log(&self) -> TransitionLog {
        self.shared
            .log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the owning scope is still alive.
    pub fn is_active(&self) -> bool {
        self.scope.is_active()
    }

    /// End the owning scope. Idempotent.
    ///
    /// From this point on, every emission — including settlements of
    /// operations still in flight — is dropped silently, and the state
    /// observed at retirement stays frozen. The operations themselves keep
    /// running to completion untracked; only the effect of their settlement
    /// is suppressed.
    pub fn retire(&self) {
        self.scope.retire();
    }

    /// Launch an operation.
    ///
    /// Emits `Started` through the guard synchronously, before returning.
    /// The returned driver future awaits the operation and emits
    /// `Succeeded`/`Failed` through the guard; await it or spawn it on an
    /// executor — if it is dropped, the operation never runs and the state
    /// stays pending.
    ///
    /// The operation must settle exactly once: a success value or a failure,
    /// never both, never more than once. That is the `Result` contract, so
    /// any well-formed future qualifies.
    ///
    /// If `run` is invoked again before an earlier operation settles, both
    /// settlements are delivered in whatever order they naturally occur; the
    /// controller does not track which run is current, so a late settlement
    /// of an earlier run overwrites newer state. Callers are expected to keep
    /// at most one run meaningful at a time.
    #[must_use = "the driver future delivers the settlement; await it or spawn it"]
    pub fn run<F>(&self, operation: F) -> impl Future<Output = ()>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.dispatch.dispatch(Event::Started);

        let dispatch = self.dispatch.clone();
        async move {
            match operation.await {
                Ok(data) => dispatch.dispatch(Event::Succeeded(data)),
                Err(error) => dispatch.dispatch(Event::Failed(error)),
            }
        }
    }
}

impl<T, E> Default for Controller<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Controller<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            dispatch: self.dispatch.clone(),
            scope: self.scope.clone(),
        }
    }
}
