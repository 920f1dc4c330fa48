//! Monitor 1: a finite resolution must land in a conflict-free region.
//!
//! A maneuver the oracle resolved to a finite value should end the
//! conflict, so its region must be NONE or RECOVERY. A finite resolution
//! classified UNKNOWN is a hard failure. NaN (no maneuver in that
//! direction) and ±inf (unbounded) resolutions are exempt.

use crate::bands::{Dimension, DimensionResolution, OracleSnapshot, Region, Severity};

use super::result::{DimensionSeverities, MonitorResult};

/// Audit a single (value, region) resolution.
pub fn check_single_resolution(resolution: DimensionResolution) -> Severity {
    if resolution.value.is_finite() {
        if resolution.region == Region::Unknown {
            return Severity::Red;
        }
        if resolution.region.is_mid_conflict() {
            return Severity::Yellow;
        }
    }
    Severity::Green
}

fn check_dimension(snapshot: &OracleSnapshot, dimension: Dimension) -> Severity {
    check_single_resolution(snapshot.preferred_resolution(dimension))
        .max(check_single_resolution(snapshot.secondary_resolution(dimension)))
}

/// Evaluate monitor 1 over all four dimensions, preferred and secondary
/// directions.
pub fn evaluate_finite_resolution(snapshot: &OracleSnapshot) -> MonitorResult {
    MonitorResult::from_details(DimensionSeverities {
        heading: check_dimension(snapshot, Dimension::Heading),
        horizontal_speed: check_dimension(snapshot, Dimension::HorizontalSpeed),
        vertical_speed: check_dimension(snapshot, Dimension::VerticalSpeed),
        altitude: check_dimension(snapshot, Dimension::Altitude),
    })
}
