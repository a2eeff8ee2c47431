//! Aggregation of per-snapshot propagation decisions into per-constraint effectiveness ratios.

mod effectiveness;

pub use effectiveness::*;
