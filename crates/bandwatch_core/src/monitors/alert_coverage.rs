//! Monitor 3: the band region at the current value must cover the
//! severity of actionable traffic alerts.
//!
//! An alert is actionable when its level exceeds the ordinal of the
//! configured corrective-alert region. The scan walks traffic in index
//! order and returns on the FIRST finding; actionable alerts the current
//! region covers do not stop the scan. The check does not apply to
//! altitude; its slot is reported as a fixed Green.

use crate::bands::{Dimension, OracleSnapshot, Region, Severity};

use super::result::{DimensionSeverities, MonitorResult};

/// Alerting threshold: the corrective region's ordinal.
///
/// An unclassifiable corrective region has no ordinal and yields -1,
/// making every positive alert actionable.
fn alert_threshold(snapshot: &OracleSnapshot) -> i32 {
    snapshot
        .corrective_threshold_region()
        .ordinal()
        .map_or(-1, i32::from)
}

/// Audit one dimension's current-value region against the traffic alerts.
fn check_dimension(snapshot: &OracleSnapshot, current_region: Region) -> Severity {
    let threshold = alert_threshold(snapshot);
    for alert in snapshot.traffic_alerts() {
        if alert.alert_level > threshold {
            match current_region.ordinal() {
                None => return Severity::Red,
                Some(level) if i32::from(level) < alert.alert_level => return Severity::Yellow,
                // Covered: keep scanning for a later offender.
                Some(_) => {}
            }
        }
    }
    Severity::Green
}

/// Evaluate monitor 3 over heading, horizontal speed and vertical speed.
pub fn evaluate_alert_coverage(snapshot: &OracleSnapshot) -> MonitorResult {
    MonitorResult::from_details(DimensionSeverities {
        heading: check_dimension(snapshot, snapshot.current_region(Dimension::Heading)),
        horizontal_speed: check_dimension(
            snapshot,
            snapshot.current_region(Dimension::HorizontalSpeed),
        ),
        vertical_speed: check_dimension(
            snapshot,
            snapshot.current_region(Dimension::VerticalSpeed),
        ),
        altitude: Severity::Green,
    })
}
