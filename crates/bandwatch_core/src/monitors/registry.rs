//! Monitor registry: static metadata, capability list and latched colors.
//!
//! Monitor ids are 1-based. Ids outside the active set answer `None`
//! everywhere instead of failing; callers must treat that no-data case
//! as distinct from `Green`.

use crate::bands::{OracleSnapshot, Severity};

use super::alert_coverage::evaluate_alert_coverage;
use super::band_exclusivity::evaluate_band_exclusivity;
use super::finite_resolution::evaluate_finite_resolution;
use super::resolution_consistency::evaluate_resolution_consistency;
use super::result::MonitorResult;
use super::state::{MONITOR_COUNT, MonitorState};

// ─── Legends ────────────────────────────────────────────────────────────

/// Explanation of what each severity means for one monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    pub green: &'static str,
    pub yellow: &'static str,
    /// Monitors without a hard-failure branch have no red entry.
    pub red: Option<&'static str>,
}

impl Legend {
    /// Explanation text for `severity`, if the monitor can report it.
    pub fn text(&self, severity: Severity) -> Option<&'static str> {
        match severity {
            Severity::Green => Some(self.green),
            Severity::Yellow => Some(self.yellow),
            Severity::Red => self.red,
        }
    }
}

static LABELS: [&str; MONITOR_COUNT] = [
    "M1: Finite resolution \u{21d2} Region is NONE or RECOVERY",
    "M2: One resolution is NaN \u{21d2} All resolutions are NaN",
    "M3: Band(current value) \u{2265} Alert(traffic)",
    "M4: It is never the case that NONE and RECOVERY appear in the same list of bands",
];

static LEGENDS: [Legend; MONITOR_COUNT] = [
    Legend {
        green: "Valid finite resolution.",
        yellow: "Property failure: resolution is finite and region is not NONE nor RECOVERY.",
        red: Some("Property failure: resolution is finite and region is UNKNOWN."),
    },
    Legend {
        green: "Consistent resolutions.",
        yellow: "Property failure: one resolution is NaN and other resolutions are not NaN \
                 and region of current value is not RECOVERY.",
        red: None,
    },
    Legend {
        green: "Valid non-zero alerts.",
        yellow: "Property failure: traffic aircraft has a non-zero alert and the region of \
                 the current value (heading, speed) is lower than the traffic alert.",
        red: Some(
            "Property failure: traffic aircraft has a non-zero alert and the region of the \
             current value (heading, speed) is UNKNOWN.",
        ),
    },
    Legend {
        green: "Valid region colors.",
        yellow: "Property failure: NONE and RECOVERY appear in the same list of bands.",
        red: None,
    },
];

// ─── Capability list ────────────────────────────────────────────────────

/// Which monitor ids a registry serves.
///
/// Earlier toolchain versions shipped with three monitors; versioning is
/// a capability list here rather than a separate evaluator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSet {
    active: [bool; MONITOR_COUNT],
}

impl MonitorSet {
    /// The canonical four-monitor set.
    pub fn canonical() -> Self {
        Self {
            active: [true; MONITOR_COUNT],
        }
    }

    /// The three-monitor predecessor set (no band-exclusivity monitor).
    pub fn legacy_v1() -> Self {
        Self {
            active: [true, true, true, false],
        }
    }

    /// Whether 1-based `monitor_id` is in this set.
    pub fn contains(&self, monitor_id: usize) -> bool {
        (1..=MONITOR_COUNT).contains(&monitor_id) && self.active[monitor_id - 1]
    }

    /// Number of active monitors.
    pub fn len(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active 1-based ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=MONITOR_COUNT).filter(|id| self.contains(*id))
    }
}

impl Default for MonitorSet {
    fn default() -> Self {
        Self::canonical()
    }
}

// ─── Registry ───────────────────────────────────────────────────────────

/// Owns the severity latches and dispatches evaluations by monitor id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRegistry {
    set: MonitorSet,
    state: MonitorState,
}

impl MonitorRegistry {
    /// Registry over the canonical four-monitor set, latches fresh.
    pub fn new() -> Self {
        Self::with_monitors(MonitorSet::canonical())
    }

    /// Registry over an explicit capability list.
    pub fn with_monitors(set: MonitorSet) -> Self {
        Self {
            set,
            state: MonitorState::new(),
        }
    }

    /// Number of active monitors.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn active_set(&self) -> MonitorSet {
        self.set
    }

    pub fn is_active(&self, monitor_id: usize) -> bool {
        self.set.contains(monitor_id)
    }

    /// Static label for an active monitor id.
    pub fn label(&self, monitor_id: usize) -> Option<&'static str> {
        self.set
            .contains(monitor_id)
            .then(|| LABELS[monitor_id - 1])
    }

    /// Static legend for an active monitor id.
    pub fn legend(&self, monitor_id: usize) -> Option<&'static Legend> {
        self.set
            .contains(monitor_id)
            .then(|| &LEGENDS[monitor_id - 1])
    }

    /// Current latched severity for an active monitor id.
    pub fn color(&self, monitor_id: usize) -> Option<Severity> {
        if !self.set.contains(monitor_id) {
            return None;
        }
        self.state.latched(monitor_id)
    }

    /// Evaluate one monitor against `snapshot` and fold the overall
    /// severity into its latch.
    ///
    /// The caller drives this once per timestep per monitor; repeating a
    /// call with an unchanged snapshot cannot move the latch.
    pub fn evaluate(
        &mut self,
        monitor_id: usize,
        snapshot: &OracleSnapshot,
    ) -> Option<MonitorResult> {
        if !self.set.contains(monitor_id) {
            return None;
        }
        let result = match monitor_id {
            1 => evaluate_finite_resolution(snapshot),
            2 => evaluate_resolution_consistency(snapshot),
            3 => evaluate_alert_coverage(snapshot),
            4 => evaluate_band_exclusivity(snapshot),
            _ => return None,
        };
        self.state.observe(monitor_id, result.overall);
        Some(result)
    }

    /// Evaluate every active monitor against `snapshot`, in id order.
    pub fn evaluate_all(&mut self, snapshot: &OracleSnapshot) -> Vec<(usize, MonitorResult)> {
        let ids: Vec<usize> = self.set.ids().collect();
        ids.into_iter()
            .filter_map(|id| self.evaluate(id, snapshot).map(|result| (id, result)))
            .collect()
    }
}

impl Default for MonitorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
