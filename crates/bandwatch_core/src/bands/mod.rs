//! Band and conflict-region vocabulary shared by every monitor.

pub mod region;
pub mod severity;
pub mod snapshot;

pub use region::Region;
pub use severity::Severity;
pub use snapshot::{
    BandSegment, Dimension, DimensionResolution, OracleSnapshot, ResolutionPair, TrafficAlert,
};
