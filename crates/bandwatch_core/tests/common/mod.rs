use bandwatch_core::bands::{
    DimensionResolution, OracleSnapshot, Region, ResolutionPair, TrafficAlert,
};

/// Test helper: a snapshot with no findings anywhere.
///
/// The pre-refresh default (NaN resolutions, UNKNOWN regions, empty band
/// lists, no traffic) evaluates Green under every monitor. Tests that
/// need a specific finding start from this and override fields through
/// the snapshot setters.
pub fn quiet_snapshot() -> OracleSnapshot {
    OracleSnapshot::default()
}

/// Test helper: a resolution pair with the same value and region in both
/// directions.
#[allow(dead_code)]
pub fn uniform_pair(value: f64, region: Region) -> ResolutionPair {
    ResolutionPair::new(
        DimensionResolution::new(value, region),
        DimensionResolution::new(value, region),
    )
}

/// Test helper: a single traffic aircraft at the given alert level.
#[allow(dead_code)]
pub fn one_aircraft(alert_level: i32) -> Vec<TrafficAlert> {
    vec![TrafficAlert::new("AC1", alert_level)]
}
