use serde::Serialize;

/// Phase of a single aggregation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationState {
    Dispatching,
    Accumulating,
    Finalized,
}

/// Outcome of one aggregation, with the bookkeeping needed for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Ascending, duplicate-free union of every contribution received in time.
    pub numbers: Vec<i64>,
    pub state: AggregationState,
    /// Fetches spawned (one per eligible source).
    pub dispatched: usize,
    /// Fetches that reported before finalization, contributing or not.
    pub received: usize,
    /// True when the deadline fired before every fetch reported.
    pub timed_out: bool,
}
