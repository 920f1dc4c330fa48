//! Property monitors auditing the oracle's per-timestep outputs.
//!
//! Each monitor is a pure function over an [`OracleSnapshot`]
//! (`bands::snapshot`); the registry feeds every evaluation into a
//! per-monitor monotonic severity latch.

pub mod alert_coverage;
pub mod band_exclusivity;
pub mod finite_resolution;
pub mod registry;
pub mod resolution_consistency;
pub mod result;
pub mod state;

pub use alert_coverage::evaluate_alert_coverage;
pub use band_exclusivity::evaluate_band_exclusivity;
pub use finite_resolution::{check_single_resolution, evaluate_finite_resolution};
pub use registry::{Legend, MonitorRegistry, MonitorSet};
pub use resolution_consistency::evaluate_resolution_consistency;
pub use result::{DimensionSeverities, MonitorResult};
pub use state::{MONITOR_COUNT, MonitorState};
