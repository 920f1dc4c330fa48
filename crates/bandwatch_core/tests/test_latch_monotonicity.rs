//! The per-monitor severity latch only ever moves upward.

mod common;

use bandwatch_core::bands::{Dimension, Region, Severity};
use bandwatch_core::monitors::MonitorRegistry;
use common::{quiet_snapshot, uniform_pair};

/// Snapshot that drives monitor 1 (and only monitor 1) to Yellow:
/// finite resolutions in MID for every checked dimension, so monitor 2
/// sees no NaN slots.
fn yellow_snapshot() -> bandwatch_core::bands::OracleSnapshot {
    let mut snap = quiet_snapshot();
    snap.set_resolutions(Dimension::Heading, uniform_pair(5.0, Region::Mid));
    snap.set_resolutions(Dimension::HorizontalSpeed, uniform_pair(5.0, Region::Mid));
    snap.set_resolutions(Dimension::VerticalSpeed, uniform_pair(5.0, Region::Mid));
    snap
}

/// Snapshot that drives monitor 1 to Red (finite resolutions, UNKNOWN).
fn red_snapshot() -> bandwatch_core::bands::OracleSnapshot {
    let mut snap = quiet_snapshot();
    snap.set_resolutions(Dimension::Heading, uniform_pair(5.0, Region::Unknown));
    snap.set_resolutions(Dimension::HorizontalSpeed, uniform_pair(5.0, Region::Unknown));
    snap.set_resolutions(Dimension::VerticalSpeed, uniform_pair(5.0, Region::Unknown));
    snap
}

#[test]
fn test_latch_holds_worst_observed_severity() {
    let mut registry = MonitorRegistry::new();

    let result = registry.evaluate(1, &yellow_snapshot()).unwrap();
    assert_eq!(result.overall, Severity::Yellow);
    assert_eq!(registry.color(1), Some(Severity::Yellow));

    // A Green timestep afterwards must not lower the latch.
    let result = registry.evaluate(1, &quiet_snapshot()).unwrap();
    assert_eq!(result.overall, Severity::Green);
    assert_eq!(registry.color(1), Some(Severity::Yellow));

    let result = registry.evaluate(1, &red_snapshot()).unwrap();
    assert_eq!(result.overall, Severity::Red);
    assert_eq!(registry.color(1), Some(Severity::Red));
}

/// Latch never decreases across a whole scenario walk, for any monitor.
#[test]
fn test_latch_is_monotonic_over_a_walk() {
    let mut registry = MonitorRegistry::new();
    let timeline = [
        quiet_snapshot(),
        yellow_snapshot(),
        quiet_snapshot(),
        red_snapshot(),
        quiet_snapshot(),
    ];

    let mut previous = vec![Severity::Green; 4];
    for snap in &timeline {
        registry.evaluate_all(snap);
        for id in 1..=4 {
            let latched = registry.color(id).unwrap();
            assert!(latched >= previous[id - 1], "latch decreased for {id}");
            previous[id - 1] = latched;
        }
    }
    assert_eq!(registry.color(1), Some(Severity::Red));
    assert_eq!(registry.color(4), Some(Severity::Green));
}

/// Re-evaluating an unchanged snapshot cannot move the latch.
#[test]
fn test_evaluate_is_idempotent_per_snapshot() {
    let mut registry = MonitorRegistry::new();
    let snap = yellow_snapshot();

    let first = registry.evaluate(1, &snap).unwrap();
    let after_first = registry.color(1);
    let second = registry.evaluate(1, &snap).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.color(1), after_first);
}

/// Each monitor latches independently.
#[test]
fn test_latches_are_per_monitor() {
    let mut registry = MonitorRegistry::new();
    registry.evaluate_all(&yellow_snapshot());

    assert_eq!(registry.color(1), Some(Severity::Yellow));
    // The other monitors saw nothing in that snapshot.
    assert_eq!(registry.color(2), Some(Severity::Green));
    assert_eq!(registry.color(3), Some(Severity::Green));
    assert_eq!(registry.color(4), Some(Severity::Green));
}
