use std::cell::Cell;

use super::*;

#[test]
fn latch_acquires_once() {
    let latch = FetchLatch::default();
    assert!(!latch.is_set());
    assert!(latch.try_acquire());
    assert!(!latch.try_acquire());
    assert!(latch.is_set());
}

#[test]
fn remote_not_loaded_shows_placeholder_and_fetches_once() {
    let gate = DataReadinessGate::new(DataSource::Remote);
    let fetches = Cell::new(0);
    for _ in 0..5 {
        assert_eq!(gate.evaluate(|| false, || fetches.set(fetches.get() + 1)), ReadinessOutcome::Placeholder);
    }
    assert_eq!(fetches.get(), 1);
    assert!(gate.fetch_requested());
}

#[test]
fn remote_renders_once_loaded_without_refetching() {
    let gate = DataReadinessGate::new(DataSource::Remote);
    let fetches = Cell::new(0);
    gate.evaluate(|| false, || fetches.set(fetches.get() + 1));
    assert_eq!(gate.evaluate(|| true, || fetches.set(fetches.get() + 1)), ReadinessOutcome::Render);
    assert_eq!(fetches.get(), 1);
}

#[test]
fn fetch_runs_before_first_readiness_read() {
    let gate = DataReadinessGate::new(DataSource::Remote);
    let loaded = Cell::new(false);
    let outcome = gate.evaluate(|| loaded.get(), || loaded.set(true));
    assert_eq!(outcome, ReadinessOutcome::Render);
}

#[test]
fn new_mount_fetches_again() {
    let fetches = Cell::new(0);
    DataReadinessGate::new(DataSource::Remote).evaluate(|| false, || fetches.set(fetches.get() + 1));
    DataReadinessGate::new(DataSource::Remote).evaluate(|| false, || fetches.set(fetches.get() + 1));
    assert_eq!(fetches.get(), 2);
}

#[test]
fn local_source_renders_regardless_of_flag() {
    let gate = DataReadinessGate::new(DataSource::Local);
    let fetches = Cell::new(0);
    assert_eq!(gate.evaluate(|| false, || fetches.set(fetches.get() + 1)), ReadinessOutcome::Render);
    assert_eq!(gate.evaluate(|| true, || fetches.set(fetches.get() + 1)), ReadinessOutcome::Render);
    assert_eq!(fetches.get(), 0);
    assert!(!gate.fetch_requested());
}

#[test]
fn outcome_is_stable_while_flag_is_unchanged() {
    let gate = DataReadinessGate::new(DataSource::Remote);
    let first = gate.evaluate(|| false, || {});
    assert_eq!(gate.evaluate(|| false, || {}), first);
    let ready = gate.evaluate(|| true, || {});
    assert_ne!(ready, first);
    assert_eq!(gate.evaluate(|| true, || {}), ready);
}
