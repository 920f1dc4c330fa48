//! Scenario report assembly and JSON rendering.
//!
//! The core monitor API is deliberately serialization-free; this module
//! walks a pre-materialized scenario through a [`MonitorRegistry`] and
//! assembles the per-monitor result arrays plus latched colors the
//! display layer consumes. Strictly sequential: one timestep is evaluated
//! to completion (every active monitor exactly once) before the next.

use serde::Serialize;

use bandwatch_core::bands::{OracleSnapshot, Severity};
use bandwatch_core::monitors::{Legend, MonitorRegistry, MonitorResult};

// ─── Color rendering ────────────────────────────────────────────────────

/// Lower-case color name, with "grey" for the no-data sentinel.
pub fn severity_label(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(s) => s.as_str(),
        None => "grey",
    }
}

// ─── Report records ─────────────────────────────────────────────────────

/// Per-dimension colors of one monitor evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionDetails {
    #[serde(rename = "Heading")]
    pub heading: &'static str,
    #[serde(rename = "Horizontal Speed")]
    pub horizontal_speed: &'static str,
    #[serde(rename = "Vertical Speed")]
    pub vertical_speed: &'static str,
    #[serde(rename = "Altitude")]
    pub altitude: &'static str,
}

impl DimensionDetails {
    pub fn from_result(result: &MonitorResult) -> Self {
        Self {
            heading: result.details.heading.as_str(),
            horizontal_speed: result.details.horizontal_speed.as_str(),
            vertical_speed: result.details.vertical_speed.as_str(),
            altitude: result.details.altitude.as_str(),
        }
    }
}

/// One monitor evaluation at one timestep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestepEntry {
    pub time: f64,
    pub color: &'static str,
    pub details: DimensionDetails,
}

/// Legend rendered as color-to-explanation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub green: &'static str,
    pub yellow: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<&'static str>,
}

impl LegendEntry {
    pub fn from_legend(legend: &Legend) -> Self {
        Self {
            green: legend.green,
            yellow: legend.yellow,
            red: legend.red,
        }
    }
}

/// One monitor's full scenario record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSection {
    pub id: usize,
    pub label: &'static str,
    pub legend: LegendEntry,
    /// Latched (worst-observed) color over the whole walk.
    pub color: &'static str,
    pub results: Vec<TimestepEntry>,
}

/// Everything the display layer needs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub monitors: Vec<MonitorSection>,
}

impl ScenarioReport {
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ─── Scenario runner ────────────────────────────────────────────────────

/// Drives a registry over a scenario, one snapshot per timestep.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    registry: MonitorRegistry,
    // Entry vectors indexed in active-id order, parallel to `ids`.
    ids: Vec<usize>,
    entries: Vec<Vec<TimestepEntry>>,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::with_registry(MonitorRegistry::new())
    }

    /// Runner over an explicit registry (e.g. a legacy monitor set).
    pub fn with_registry(registry: MonitorRegistry) -> Self {
        let ids: Vec<usize> = registry.active_set().ids().collect();
        let entries = vec![Vec::new(); ids.len()];
        Self {
            registry,
            ids,
            entries,
        }
    }

    pub fn registry(&self) -> &MonitorRegistry {
        &self.registry
    }

    /// Evaluate every active monitor against `snapshot` and record the
    /// results under `time`. Call exactly once per timestep.
    pub fn step(&mut self, time: f64, snapshot: &OracleSnapshot) {
        // evaluate_all yields the active ids ascending, parallel to
        // `self.ids` and `self.entries`.
        let results = self.registry.evaluate_all(snapshot);
        for (slot, (_, result)) in results.into_iter().enumerate() {
            self.entries[slot].push(TimestepEntry {
                time,
                color: result.overall.as_str(),
                details: DimensionDetails::from_result(&result),
            });
        }
    }

    /// Walk a whole timeline of `(time, snapshot)` pairs and assemble the
    /// report.
    pub fn run(
        mut self,
        timeline: impl IntoIterator<Item = (f64, OracleSnapshot)>,
    ) -> ScenarioReport {
        for (time, snapshot) in timeline {
            self.step(time, &snapshot);
        }
        self.finish()
    }

    /// Assemble the report from everything recorded so far.
    pub fn finish(self) -> ScenarioReport {
        let registry = self.registry;
        // `ids` holds active ids only, so label/legend exist for each.
        let monitors = self
            .ids
            .into_iter()
            .zip(self.entries)
            .filter_map(|(id, results)| {
                let label = registry.label(id)?;
                let legend = registry.legend(id)?;
                Some(MonitorSection {
                    id,
                    label,
                    legend: LegendEntry::from_legend(legend),
                    color: severity_label(registry.color(id)),
                    results,
                })
            })
            .collect();
        ScenarioReport { monitors }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
