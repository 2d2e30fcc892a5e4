//! Snapshot aggregation across every vault of a deployment.

mod aggregator;

pub use aggregator::{fetch_dynamic, fetch_static, SnapshotAggregator, ALL_MARKETS};
