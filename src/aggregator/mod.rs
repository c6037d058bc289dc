//! Aggregation Controller Module
//!
//! Answers one request by fanning out a fetch per eligible source and folding the answers
//! into a sorted, duplicate-free aggregate before a deadline.
//!
//! ## Lifecycle (per request)
//! 1. **Dispatching**: Raw addresses are filtered through the eligibility check. With nothing
//!    eligible the request finalizes immediately with an empty aggregate.
//! 2. **Accumulating**: One task per source is spawned into a `JoinSet`; results come back on a
//!    single bounded `mpsc` channel. Each arrival recomputes the aggregate from every
//!    contribution seen so far.
//! 3. **Finalized**: Reached when every fetch has reported or the deadline fires, whichever is
//!    first. The shared `CancellationToken` is cancelled and the `JoinSet` is shut down before
//!    the answer is returned, so no fetch outlives the request.
//!
//! ## Submodules
//! - **`types`**: `AggregationState` and `AggregationReport`.
//! - **`state`**: The per-request state machine (`Aggregation`).
//! - **`controller`**: The `Aggregator` that drives fetchers against the deadline.

pub mod controller;
pub mod state;
pub mod types;
