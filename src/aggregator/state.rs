//! Per-request Aggregation State Machine
//!
//! `Dispatching -> Accumulating -> Finalized`, or `Dispatching -> Finalized` when nothing was
//! dispatched. Once `Finalized`, every further event is ignored, so a request finalizes
//! exactly once.

use super::types::{AggregationReport, AggregationState};
use crate::merge::merge_dedup;
use crate::source::types::FetchOutcome;

#[derive(Debug)]
pub struct Aggregation {
    state: AggregationState,
    dispatched: usize,
    received: usize,
    timed_out: bool,
    contributions: Vec<Vec<i64>>,
    aggregate: Vec<i64>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self {
            state: AggregationState::Dispatching,
            dispatched: 0,
            received: 0,
            timed_out: false,
            contributions: Vec::new(),
            aggregate: Vec::new(),
        }
    }

    pub fn state(&self) -> AggregationState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == AggregationState::Finalized
    }

    /// Aggregate as of the last arrival.
    pub fn current(&self) -> &[i64] {
        &self.aggregate
    }

    /// Records how many fetches were spawned. Zero finalizes straight away.
    pub fn begin(&mut self, dispatched: usize) -> AggregationState {
        if self.state != AggregationState::Dispatching {
            return self.state;
        }

        self.dispatched = dispatched;
        self.state = if dispatched == 0 {
            AggregationState::Finalized
        } else {
            AggregationState::Accumulating
        };
        self.state
    }

    /// Folds one fetch result in and finalizes once every fetch has reported.
    pub fn record(&mut self, outcome: FetchOutcome) -> AggregationState {
        if self.state != AggregationState::Accumulating {
            tracing::debug!("Ignoring fetch result in state {:?}", self.state);
            return self.state;
        }

        self.received += 1;
        if let Some(numbers) = outcome.into_contribution() {
            self.contributions.push(numbers);
            self.aggregate = merge_dedup(&self.contributions);
        }

        if self.received == self.dispatched {
            self.state = AggregationState::Finalized;
        }
        self.state
    }

    /// Finalizes with whatever has been aggregated so far.
    pub fn expire(&mut self) -> AggregationState {
        if self.state == AggregationState::Accumulating {
            self.timed_out = true;
            self.state = AggregationState::Finalized;
        }
        self.state
    }

    /// Finalizes because no further results can arrive (every fetch task is gone).
    pub fn close(&mut self) -> AggregationState {
        if self.state == AggregationState::Accumulating {
            self.state = AggregationState::Finalized;
        }
        self.state
    }

    pub fn into_report(self) -> AggregationReport {
        AggregationReport {
            numbers: self.aggregate,
            state: self.state,
            dispatched: self.dispatched,
            received: self.received,
            timed_out: self.timed_out,
        }
    }
}

impl Default for Aggregation {
    fn default() -> Self {
        Self::new()
    }
}
