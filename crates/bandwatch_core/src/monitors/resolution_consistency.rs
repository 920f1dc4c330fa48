//! Monitor 2: if one resolution is NaN, all resolutions should be NaN.
//!
//! The oracle computes resolutions jointly, so a NaN resolution next to a
//! defined sibling suggests an inconsistency — unless the ownship is
//! already inside a recovery region for that dimension, where a missing
//! resolution is expected. The preferred and secondary direction sets are
//! audited independently. The check does not apply to altitude; its slot
//! is reported as a fixed Green so the breakdown stays uniform.

use crate::bands::{Dimension, OracleSnapshot, Region, Severity};

use super::result::{DimensionSeverities, MonitorResult};

/// The three dimensions the consistency check applies to.
const CHECKED: [Dimension; 3] = [
    Dimension::Heading,
    Dimension::HorizontalSpeed,
    Dimension::VerticalSpeed,
];

/// Audit one dimension's slot within a direction set.
///
/// `values` are the set's resolutions for [`CHECKED`], in order; `index`
/// selects the slot under audit.
fn check_slot(values: &[f64; 3], index: usize, current_region: Region) -> Severity {
    if current_region != Region::Recovery {
        let sibling_defined = values.iter().any(|v| !v.is_nan());
        if values[index].is_nan() && sibling_defined {
            return Severity::Yellow;
        }
    }
    Severity::Green
}

/// Evaluate monitor 2 over both direction sets.
pub fn evaluate_resolution_consistency(snapshot: &OracleSnapshot) -> MonitorResult {
    let preferred = CHECKED.map(|d| snapshot.preferred_resolution(d).value);
    let secondary = CHECKED.map(|d| snapshot.secondary_resolution(d).value);

    let check = |index: usize| {
        let current = snapshot.current_region(CHECKED[index]);
        check_slot(&preferred, index, current).max(check_slot(&secondary, index, current))
    };

    MonitorResult::from_details(DimensionSeverities {
        heading: check(0),
        horizontal_speed: check(1),
        vertical_speed: check(2),
        altitude: Severity::Green,
    })
}
