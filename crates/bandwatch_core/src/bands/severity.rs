//! Monitor finding severity.

/// Severity of a monitor finding.
///
/// Totally ordered `Green < Yellow < Red`; combining severities is always
/// `max` under this order. The "no data" case (monitor id out of range,
/// monitor not active) is `Option::<Severity>::None` at the registry
/// surface, never a fourth variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// No finding.
    Green,
    /// Soft property violation.
    Yellow,
    /// Hard property violation (typically involving an UNKNOWN region).
    Red,
}

impl Severity {
    /// Lower-case display name used by the report layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Yellow => "yellow",
            Severity::Red => "red",
        }
    }
}
