//! Latched worst-observed severity per monitor.
//!
//! The latch only ever moves upward under `Green < Yellow < Red`:
//! `latch(t) = max(latch(t-1), instantaneous(t))`. It is owned by the
//! caller driving the scenario walk (no statics) and has exactly one
//! mutation point, [`MonitorState::observe`].

use crate::bands::Severity;

/// Number of monitors in the canonical set.
pub const MONITOR_COUNT: usize = 4;

/// Worst severity each monitor has reported so far in the scenario walk.
///
/// Created once per scenario run; re-observing an identical severity is a
/// no-op since max-combine is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    latched: [Severity; MONITOR_COUNT],
}

impl MonitorState {
    /// Fresh state: every latch starts at `Green` (no finding yet).
    pub fn new() -> Self {
        Self {
            latched: [Severity::Green; MONITOR_COUNT],
        }
    }

    /// Latched severity for 1-based `monitor_id`, `None` out of range.
    pub fn latched(&self, monitor_id: usize) -> Option<Severity> {
        Some(self.latched[slot(monitor_id)?])
    }

    /// Fold one instantaneous severity into `monitor_id`'s latch and
    /// return the latched value. Out-of-range ids are ignored (`None`).
    pub fn observe(&mut self, monitor_id: usize, severity: Severity) -> Option<Severity> {
        let index = slot(monitor_id)?;
        let previous = self.latched[index];
        if severity > previous {
            tracing::debug!(
                "monitor {} latch escalated {} -> {}",
                monitor_id,
                previous.as_str(),
                severity.as_str()
            );
            self.latched[index] = severity;
        }
        Some(self.latched[index])
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(monitor_id: usize) -> Option<usize> {
    if (1..=MONITOR_COUNT).contains(&monitor_id) {
        Some(monitor_id - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_green_and_only_rises() {
        let mut state = MonitorState::new();
        assert_eq!(state.latched(1), Some(Severity::Green));

        assert_eq!(state.observe(1, Severity::Yellow), Some(Severity::Yellow));
        // A later Green observation must not lower the latch.
        assert_eq!(state.observe(1, Severity::Green), Some(Severity::Yellow));
        assert_eq!(state.observe(1, Severity::Red), Some(Severity::Red));
        assert_eq!(state.latched(1), Some(Severity::Red));
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut state = MonitorState::new();
        assert_eq!(state.latched(0), None);
        assert_eq!(state.latched(MONITOR_COUNT + 1), None);
        assert_eq!(state.observe(0, Severity::Red), None);
        // Nothing leaked into a valid slot.
        for id in 1..=MONITOR_COUNT {
            assert_eq!(state.latched(id), Some(Severity::Green));
        }
    }
}
