//! Conflict-region classification of a band or a single value.
//!
//! The five known regions carry a total order
//! `None < Far < Mid < Near < Recovery`, exposed only through `ordinal()`.
//! `Unknown` is an upstream classification failure and is never compared
//! ordinally, so `Region` deliberately does not implement `Ord`.

// ─── Region ─────────────────────────────────────────────────────────────

/// Conflict region reported by the DAA oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Conflict-free.
    None,
    Far,
    Mid,
    Near,
    /// Well-clear already lost; recovery maneuver region.
    Recovery,
    /// The oracle could not classify the value.
    Unknown,
}

impl Region {
    /// All known (orderable) regions, in ordinal order.
    pub const KNOWN: [Region; 5] = [
        Region::None,
        Region::Far,
        Region::Mid,
        Region::Near,
        Region::Recovery,
    ];

    /// Position of this region in the conflict order, `None` for `Unknown`.
    ///
    /// This is the one canonical region-to-ordinal mapping; monitors must
    /// not keep private copies of it.
    pub fn ordinal(self) -> Option<u8> {
        match self {
            Region::None => Some(0),
            Region::Far => Some(1),
            Region::Mid => Some(2),
            Region::Near => Some(3),
            Region::Recovery => Some(4),
            Region::Unknown => None,
        }
    }

    /// Whether this region indicates an unresolved conflict (neither
    /// conflict-free nor a recovery region, and not `Unknown`).
    pub fn is_mid_conflict(self) -> bool {
        matches!(self, Region::Far | Region::Mid | Region::Near)
    }

    /// Display name matching the oracle's own spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::None => "NONE",
            Region::Far => "FAR",
            Region::Mid => "MID",
            Region::Near => "NEAR",
            Region::Recovery => "RECOVERY",
            Region::Unknown => "UNKNOWN",
        }
    }
}
