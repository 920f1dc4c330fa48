//! Per-timestep oracle snapshot consumed by the monitors.
//!
//! The DAA oracle computes resolutions, current-value regions, band lists
//! and traffic alerts; the glue driving a scenario walk refreshes one
//! `OracleSnapshot` per timestep and hands it read-only to the monitors.
//! NaN and ±inf resolution values are ordinary domain states (maneuver
//! undefined / unbounded), not errors.

use super::region::Region;

// ─── Dimensions ─────────────────────────────────────────────────────────

/// The four controllable dimensions the oracle resolves over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Heading,
    HorizontalSpeed,
    VerticalSpeed,
    Altitude,
}

impl Dimension {
    /// All dimensions, in reporting order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Heading,
        Dimension::HorizontalSpeed,
        Dimension::VerticalSpeed,
        Dimension::Altitude,
    ];

    /// Display name used in per-dimension detail maps.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Heading => "Heading",
            Dimension::HorizontalSpeed => "Horizontal Speed",
            Dimension::VerticalSpeed => "Vertical Speed",
            Dimension::Altitude => "Altitude",
        }
    }

    fn index(self) -> usize {
        match self {
            Dimension::Heading => 0,
            Dimension::HorizontalSpeed => 1,
            Dimension::VerticalSpeed => 2,
            Dimension::Altitude => 3,
        }
    }
}

// ─── Resolutions ────────────────────────────────────────────────────────

/// A maneuver resolution: the resolved value paired with its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionResolution {
    /// Resolved value; NaN when no maneuver exists in this direction,
    /// ±inf when the maneuver is unbounded.
    pub value: f64,
    /// Region classification of the resolved value.
    pub region: Region,
}

impl DimensionResolution {
    pub fn new(value: f64, region: Region) -> Self {
        Self { value, region }
    }

    /// The oracle's "nothing computed yet" resolution.
    pub fn undefined() -> Self {
        Self {
            value: f64::NAN,
            region: Region::Unknown,
        }
    }
}

/// The two candidate maneuver directions the oracle offers per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionPair {
    /// Resolution in the oracle's preferred direction.
    pub preferred: DimensionResolution,
    /// Resolution in the alternative direction.
    pub secondary: DimensionResolution,
}

impl ResolutionPair {
    pub fn new(preferred: DimensionResolution, secondary: DimensionResolution) -> Self {
        Self {
            preferred,
            secondary,
        }
    }
}

impl Default for ResolutionPair {
    fn default() -> Self {
        Self {
            preferred: DimensionResolution::undefined(),
            secondary: DimensionResolution::undefined(),
        }
    }
}

// ─── Bands and alerts ───────────────────────────────────────────────────

/// One interval of a dimension's band list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSegment {
    pub lower: f64,
    pub upper: f64,
    pub region: Region,
}

impl BandSegment {
    pub fn new(lower: f64, upper: f64, region: Region) -> Self {
        Self {
            lower,
            upper,
            region,
        }
    }
}

/// Alert level the oracle assigned to one traffic aircraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficAlert {
    pub aircraft_id: String,
    pub alert_level: i32,
}

impl TrafficAlert {
    pub fn new(aircraft_id: impl Into<String>, alert_level: i32) -> Self {
        Self {
            aircraft_id: aircraft_id.into(),
            alert_level,
        }
    }
}

// ─── Snapshot ───────────────────────────────────────────────────────────

/// Everything the monitors read at one timestep.
///
/// `Default` is the pre-first-refresh state: NaN resolutions, `Unknown`
/// regions, empty band lists, no traffic.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleSnapshot {
    resolutions: [ResolutionPair; 4],
    current_regions: [Region; 4],
    bands: [Vec<BandSegment>; 4],
    traffic: Vec<TrafficAlert>,
    corrective_region: Region,
}

impl Default for OracleSnapshot {
    fn default() -> Self {
        Self {
            resolutions: [ResolutionPair::default(); 4],
            current_regions: [Region::Unknown; 4],
            bands: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            traffic: Vec::new(),
            corrective_region: Region::Unknown,
        }
    }
}

impl OracleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution in the oracle's preferred direction for `dimension`.
    pub fn preferred_resolution(&self, dimension: Dimension) -> DimensionResolution {
        self.resolutions[dimension.index()].preferred
    }

    /// Resolution in the alternative direction for `dimension`.
    pub fn secondary_resolution(&self, dimension: Dimension) -> DimensionResolution {
        self.resolutions[dimension.index()].secondary
    }

    /// Region classification of the ownship's present value in `dimension`.
    pub fn current_region(&self, dimension: Dimension) -> Region {
        self.current_regions[dimension.index()]
    }

    /// Ordered band list partitioning `dimension`'s value space.
    pub fn band_list(&self, dimension: Dimension) -> &[BandSegment] {
        &self.bands[dimension.index()]
    }

    /// Per-aircraft alert levels, in traffic index order.
    pub fn traffic_alerts(&self) -> &[TrafficAlert] {
        &self.traffic
    }

    /// Configured corrective-alert region; its ordinal is the alerting
    /// threshold.
    pub fn corrective_threshold_region(&self) -> Region {
        self.corrective_region
    }

    pub fn set_resolutions(&mut self, dimension: Dimension, pair: ResolutionPair) {
        self.resolutions[dimension.index()] = pair;
    }

    pub fn set_current_region(&mut self, dimension: Dimension, region: Region) {
        self.current_regions[dimension.index()] = region;
    }

    pub fn set_band_list(&mut self, dimension: Dimension, bands: Vec<BandSegment>) {
        self.bands[dimension.index()] = bands;
    }

    pub fn set_traffic_alerts(&mut self, traffic: Vec<TrafficAlert>) {
        self.traffic = traffic;
    }

    pub fn set_corrective_threshold_region(&mut self, region: Region) {
        self.corrective_region = region;
    }
}
