//! Lifecycle guarding for event dispatch.
//!
//! An asynchronous operation may settle strictly after its owning scope has
//! ended. Applying a state transition at that point would mutate a resource
//! the owner no longer holds. [`Scope`] models the owner's lifetime as an
//! owned one-way flag, and [`GuardedDispatch`] wraps a raw event sink so
//! that events arriving after retirement are dropped silently — no error,
//! no log; the silent drop is the contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The owning scope's lifetime, as an owned boolean.
///
/// Active on creation, retired exactly once, never reset. Clones share the
/// same flag, so completion futures can consult the scope across `.await`.
///
/// # Example
///
/// ```rust
/// use inflight::lifecycle::Scope;
///
/// let scope = Scope::new();
/// assert!(scope.is_active());
///
/// scope.retire();
/// scope.retire(); // idempotent
/// assert!(!scope.is_active());
/// ```
#[derive(Clone, Debug)]
pub struct Scope {
    active: Arc<AtomicBool>,
}

impl Scope {
    /// Create an active scope.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the owning scope is still alive.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// End the scope. Idempotent; the flag is never reset to active.
    pub fn retire(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// An event sink that forwards only while its scope is active.
///
/// Wraps a raw `Fn(A)` sink. [`dispatch`](Self::dispatch) forwards the event
/// while the scope lives and discards it silently afterwards.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use inflight::lifecycle::{GuardedDispatch, Scope};
///
/// let delivered = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&delivered);
///
/// let scope = Scope::new();
/// let dispatch = GuardedDispatch::new(scope.clone(), move |_: u32| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// dispatch.dispatch(1);
/// scope.retire();
/// dispatch.dispatch(2); // dropped
///
/// assert_eq!(delivered.load(Ordering::SeqCst), 1);
/// ```
pub struct GuardedDispatch<A> {
    scope: Scope,
    raw: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> GuardedDispatch<A> {
    /// Wrap a raw sink in a lifecycle guard bound to `scope`.
    ///
    /// The sink must be thread-safe (`Send + Sync`): completion futures may
    /// dispatch from whatever context drives them.
    pub fn new<F>(scope: Scope, raw: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            scope,
            raw: Arc::new(raw),
        }
    }

    /// Forward `event` to the raw sink if the scope is active; otherwise
    /// drop it silently.
    pub fn dispatch(&self, event: A) {
        if self.scope.is_active() {
            (self.raw)(event);
        }
    }

    /// The scope this dispatcher is bound to.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl<A> Clone for GuardedDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            raw: Arc::clone(&self.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_dispatch(scope: Scope) -> (GuardedDispatch<u32>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let sink_count = Arc::clone(&count);
        let dispatch = GuardedDispatch::new(scope, move |_| {
            sink_count.fetch_add(1, Ordering::SeqCst);
        });
        (dispatch, count)
    }

    #[test]
    fn scope_starts_active() {
        assert!(Scope::new().is_active());
    }

    #[test]
    fn retire_is_idempotent() {
        let scope = Scope::new();
        scope.retire();
        scope.retire();
        assert!(!scope.is_active());
    }

    #[test]
    fn clones_share_the_flag() {
        let scope = Scope::new();
        let other = scope.clone();
        other.retire();
        assert!(!scope.is_active());
    }

    #[test]
    fn dispatch_forwards_while_active() {
        let scope = Scope::new();
        let (dispatch, count) = counting_dispatch(scope);

        dispatch.dispatch(1);
        dispatch.dispatch(2);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dispatch_drops_after_retirement() {
        let scope = Scope::new();
        let (dispatch, count) = counting_dispatch(scope.clone());

        dispatch.dispatch(1);
        scope.retire();
        dispatch.dispatch(2);
        dispatch.dispatch(3);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cloned_dispatcher_respects_retirement() {
        let scope = Scope::new();
        let (dispatch, count) = counting_dispatch(scope.clone());
        let held_by_completion = dispatch.clone();

        scope.retire();
        held_by_completion.dispatch(9);

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drop_is_silent() {
        // A retired dispatcher neither panics nor errors on dispatch.
        let scope = Scope::new();
        let (dispatch, _count) = counting_dispatch(scope.clone());
        scope.retire();
        dispatch.dispatch(0);
    }
}
