//! Monitor configuration defaults.
//!
//! Scenario files name their corrective-alert region with the oracle's
//! upper-case spelling; when the scenario does not configure one, MID is
//! applied. Missing values never widen the monitored surface: the
//! default capability list is the full canonical set.

use bandwatch_core::bands::Region;
use bandwatch_core::monitors::MonitorSet;

/// Corrective-alert region applied when the scenario configures none.
pub const DEFAULT_CORRECTIVE_REGION: Region = Region::Mid;

/// Configuration for one scenario run of the monitor engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Region whose ordinal is the alerting threshold.
    pub corrective_region: Region,
    /// Which monitor ids are active.
    pub monitors: MonitorSet,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            corrective_region: DEFAULT_CORRECTIVE_REGION,
            monitors: MonitorSet::canonical(),
        }
    }
}

/// Parse a region from its scenario-file spelling ("NONE".."RECOVERY",
/// "UNKNOWN"). Unrecognized text yields `None`.
pub fn parse_region(text: &str) -> Option<Region> {
    match text {
        "NONE" => Some(Region::None),
        "FAR" => Some(Region::Far),
        "MID" => Some(Region::Mid),
        "NEAR" => Some(Region::Near),
        "RECOVERY" => Some(Region::Recovery),
        "UNKNOWN" => Some(Region::Unknown),
        _ => None,
    }
}
