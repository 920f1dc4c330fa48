//! Per-evaluation monitor output.

use crate::bands::{Dimension, Severity};

/// Severity breakdown over the four dimensions.
///
/// Every monitor reports all four slots, even where a dimension does not
/// participate in the check (its slot is then fixed `Green`), so the
/// detail structure stays uniform across monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSeverities {
    pub heading: Severity,
    pub horizontal_speed: Severity,
    pub vertical_speed: Severity,
    pub altitude: Severity,
}

impl DimensionSeverities {
    pub fn all_green() -> Self {
        Self {
            heading: Severity::Green,
            horizontal_speed: Severity::Green,
            vertical_speed: Severity::Green,
            altitude: Severity::Green,
        }
    }

    pub fn get(&self, dimension: Dimension) -> Severity {
        match dimension {
            Dimension::Heading => self.heading,
            Dimension::HorizontalSpeed => self.horizontal_speed,
            Dimension::VerticalSpeed => self.vertical_speed,
            Dimension::Altitude => self.altitude,
        }
    }

    /// Worst severity across the four slots.
    pub fn max(&self) -> Severity {
        self.heading
            .max(self.horizontal_speed)
            .max(self.vertical_speed)
            .max(self.altitude)
    }
}

impl Default for DimensionSeverities {
    fn default() -> Self {
        Self::all_green()
    }
}

/// Result of one monitor evaluation at one timestep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorResult {
    /// Worst severity across the breakdown.
    pub overall: Severity,
    /// Per-dimension breakdown.
    pub details: DimensionSeverities,
}

impl MonitorResult {
    /// Build a result whose overall severity is the breakdown maximum.
    pub fn from_details(details: DimensionSeverities) -> Self {
        Self {
            overall: details.max(),
            details,
        }
    }
}
