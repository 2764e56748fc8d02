//! Property-based tests for the pure core and the lifecycle guard.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use inflight::core::{Event, EventKind, OperationState, Status, StatusChange, TransitionLog};
use inflight::lifecycle::{GuardedDispatch, Scope};
use proptest::prelude::*;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type TestState = OperationState<u32, String>;
type TestEvent = Event<u32, String>;

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8, data in any::<u32>(), error in "[a-z]{1,8}") -> TestEvent {
        match variant {
            0 => Event::Started,
            1 => Event::Succeeded(data),
            _ => Event::Failed(error),
        }
    }
}

prop_compose! {
    fn arbitrary_state()(seed in proptest::option::of(arbitrary_event())) -> TestState {
        let idle = OperationState::idle();
        match seed {
            None => idle,
            Some(event) => idle.apply(event),
        }
    }
}

prop_compose! {
    fn arbitrary_status()(variant in 0..4u8) -> Status {
        match variant {
            0 => Status::Idle,
            1 => Status::Pending,
            2 => Status::Resolved,
            _ => Status::Rejected,
        }
    }
}

/// The payload invariants that must hold for every reachable state.
fn assert_invariants(state: &TestState) {
    assert!(
        state.data().is_none() || state.error().is_none(),
        "data and error are simultaneously populated"
    );
    match state.status() {
        Status::Idle | Status::Pending => {
            assert!(state.data().is_none() && state.error().is_none());
        }
        Status::Resolved => assert!(state.error().is_none()),
        Status::Rejected => assert!(state.data().is_none()),
    }
}

proptest! {
    #[test]
    fn apply_matches_the_transition_table(state in arbitrary_state(), event in arbitrary_event()) {
        let next = state.apply(event.clone());

        match event {
            Event::Started => {
                prop_assert_eq!(next.status(), Status::Pending);
                prop_assert!(next.data().is_none());
                prop_assert!(next.error().is_none());
            }
            Event::Succeeded(data) => {
                prop_assert_eq!(next.status(), Status::Resolved);
                prop_assert_eq!(next.data(), Some(&data));
                prop_assert!(next.error().is_none());
            }
            Event::Failed(error) => {
                prop_assert_eq!(next.status(), Status::Rejected);
                prop_assert!(next.data().is_none());
                prop_assert_eq!(next.error(), Some(&error));
            }
        }
    }

    #[test]
    fn apply_is_independent_of_the_current_state(
        first in arbitrary_state(),
        second in arbitrary_state(),
        event in arbitrary_event()
    ) {
        prop_assert_eq!(first.apply(event.clone()), second.apply(event));
    }

    #[test]
    fn apply_is_deterministic(state in arbitrary_state(), event in arbitrary_event()) {
        prop_assert_eq!(state.apply(event.clone()), state.apply(event));
    }

    #[test]
    fn payloads_stay_mutually_exclusive(events in prop::collection::vec(arbitrary_event(), 0..12)) {
        let mut state: TestState = OperationState::idle();
        assert_invariants(&state);

        for event in events {
            state = state.apply(event);
            assert_invariants(&state);
        }
    }

    #[test]
    fn status_name_is_stable(status in arbitrary_status()) {
        prop_assert_eq!(status.name(), status.name());
    }

    #[test]
    fn status_roundtrips_through_its_name(status in arbitrary_status()) {
        let json = serde_json::to_string(&status).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", status.name()));

        let back: Status = serde_json::from_str(&format!("\"{}\"", status.name())).unwrap();
        prop_assert_eq!(back, status);
    }

    #[test]
    fn state_roundtrips_through_json(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }

    #[test]
    fn event_kind_roundtrips_through_its_tag(event in arbitrary_event()) {
        let kind = event.kind();
        prop_assert_eq!(EventKind::from_str(kind.tag()).unwrap(), kind);
    }

    #[test]
    fn foreign_tags_are_rejected(tag in "[a-z]{1,12}") {
        prop_assume!(!matches!(tag.as_str(), "started" | "succeeded" | "failed"));

        let err = EventKind::from_str(&tag).unwrap_err();
        prop_assert_eq!(err.tag, tag);
    }

    #[test]
    fn retirement_is_idempotent(retirements in 1..6usize) {
        let scope = Scope::new();
        for _ in 0..retirements {
            scope.retire();
        }
        prop_assert!(!scope.is_active());
    }

    #[test]
    fn guard_forwards_exactly_the_pre_retirement_events(
        before in 0..6usize,
        after in 0..6usize
    ) {
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);

        let scope = Scope::new();
        let dispatch = GuardedDispatch::new(scope.clone(), move |_: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for i in 0..before {
            dispatch.dispatch(i as u32);
        }
        scope.retire();
        for i in 0..after {
            dispatch.dispatch(i as u32);
        }

        prop_assert_eq!(delivered.load(Ordering::SeqCst), before);
    }

    #[test]
    fn log_preserves_order(statuses in prop::collection::vec(arbitrary_status(), 1..10)) {
        let mut log = TransitionLog::new();
        let mut expected_path = vec![Status::Idle];

        for (i, to) in statuses.iter().enumerate() {
            let from = if i == 0 { Status::Idle } else { statuses[i - 1] };
            log = log.record(StatusChange {
                from,
                to: *to,
                event: EventKind::Started,
                timestamp: Utc::now(),
            });
            expected_path.push(*to);
        }

        prop_assert_eq!(log.path(), expected_path);
    }

    #[test]
    fn log_record_is_pure(from in arbitrary_status(), to in arbitrary_status()) {
        let log = TransitionLog::new();
        let recorded = log.record(StatusChange {
            from,
            to,
            event: EventKind::Started,
            timestamp: Utc::now(),
        });

        prop_assert_eq!(log.changes().len(), 0);
        prop_assert_eq!(recorded.changes().len(), 1);
    }
}
