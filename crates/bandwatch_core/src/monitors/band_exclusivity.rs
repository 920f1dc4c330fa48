//! Monitor 4: NONE and RECOVERY must never appear in the same band list.
//!
//! A band list partitions one dimension's value space at one timestep. A
//! conflict-free interval next to a recovery interval is contradictory:
//! recovery bands only exist once well-clear is already lost.

use crate::bands::{BandSegment, Dimension, OracleSnapshot, Region, Severity};

use super::result::{DimensionSeverities, MonitorResult};

/// Scan one band list for co-occurring NONE and RECOVERY segments.
fn check_band_list(bands: &[BandSegment]) -> Severity {
    let mut has_none = false;
    let mut has_recovery = false;
    for segment in bands {
        match segment.region {
            Region::None => has_none = true,
            Region::Recovery => has_recovery = true,
            _ => {}
        }
    }
    if has_none && has_recovery {
        Severity::Yellow
    } else {
        Severity::Green
    }
}

/// Evaluate monitor 4 over all four dimensions.
pub fn evaluate_band_exclusivity(snapshot: &OracleSnapshot) -> MonitorResult {
    MonitorResult::from_details(DimensionSeverities {
        heading: check_band_list(snapshot.band_list(Dimension::Heading)),
        horizontal_speed: check_band_list(snapshot.band_list(Dimension::HorizontalSpeed)),
        vertical_speed: check_band_list(snapshot.band_list(Dimension::VerticalSpeed)),
        altitude: check_band_list(snapshot.band_list(Dimension::Altitude)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_recovery_in_one_list_is_yellow() {
        let bands = vec![
            BandSegment::new(0.0, 90.0, Region::None),
            BandSegment::new(90.0, 180.0, Region::Recovery),
        ];
        assert_eq!(check_band_list(&bands), Severity::Yellow);
    }

    #[test]
    fn none_without_recovery_is_green() {
        let bands = vec![
            BandSegment::new(0.0, 90.0, Region::None),
            BandSegment::new(90.0, 180.0, Region::Far),
        ];
        assert_eq!(check_band_list(&bands), Severity::Green);
    }

    #[test]
    fn empty_list_is_green() {
        assert_eq!(check_band_list(&[]), Severity::Green);
    }
}
