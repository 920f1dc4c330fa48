//! Monitor 4: NONE and RECOVERY never co-occur in one band list.

mod common;

use bandwatch_core::bands::{BandSegment, Dimension, Region, Severity};
use bandwatch_core::monitors::evaluate_band_exclusivity;
use common::quiet_snapshot;

#[test]
fn test_none_and_recovery_in_same_list_is_yellow() {
    let mut snap = quiet_snapshot();
    snap.set_band_list(
        Dimension::Heading,
        vec![
            BandSegment::new(0.0, 90.0, Region::None),
            BandSegment::new(90.0, 180.0, Region::Recovery),
        ],
    );

    let result = evaluate_band_exclusivity(&snap);
    assert_eq!(result.details.heading, Severity::Yellow);
    assert_eq!(result.overall, Severity::Yellow);
}

#[test]
fn test_none_and_far_in_same_list_is_green() {
    let mut snap = quiet_snapshot();
    snap.set_band_list(
        Dimension::Heading,
        vec![
            BandSegment::new(0.0, 90.0, Region::None),
            BandSegment::new(90.0, 180.0, Region::Far),
        ],
    );

    let result = evaluate_band_exclusivity(&snap);
    assert_eq!(result.overall, Severity::Green);
}

/// Co-occurrence across different dimensions' lists is not a finding.
#[test]
fn test_cooccurrence_across_dimensions_is_green() {
    let mut snap = quiet_snapshot();
    snap.set_band_list(
        Dimension::Heading,
        vec![BandSegment::new(0.0, 360.0, Region::None)],
    );
    snap.set_band_list(
        Dimension::VerticalSpeed,
        vec![BandSegment::new(-100.0, 100.0, Region::Recovery)],
    );

    let result = evaluate_band_exclusivity(&snap);
    assert_eq!(result.overall, Severity::Green);
}

/// All four dimensions participate, altitude included.
#[test]
fn test_altitude_band_list_participates() {
    let mut snap = quiet_snapshot();
    snap.set_band_list(
        Dimension::Altitude,
        vec![
            BandSegment::new(0.0, 5000.0, Region::Recovery),
            BandSegment::new(5000.0, 10000.0, Region::None),
        ],
    );

    let result = evaluate_band_exclusivity(&snap);
    assert_eq!(result.details.altitude, Severity::Yellow);
    assert_eq!(result.details.heading, Severity::Green);
}

#[test]
fn test_empty_band_lists_are_green() {
    let result = evaluate_band_exclusivity(&quiet_snapshot());
    assert_eq!(result.overall, Severity::Green);
}
