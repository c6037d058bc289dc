//! Numbers Aggregator Library
//!
//! Answers "give me the sorted, deduplicated union of the integers exposed by these N
//! sources" within a fixed time budget. Slow or failing sources are tolerated: when the
//! budget runs out, whatever has been gathered is returned.
//!
//! ## Modules
//! - **`merge`**: The merge-dedup engine. Pure K-way merge of sorted sequences.
//! - **`source`**: Source eligibility, the `SourceFetcher` seam and its HTTP implementation.
//! - **`aggregator`**: The fan-out/fan-in controller that races fetches against the deadline
//!   and guarantees no fetch outlives the request.
//! - **`api`**: The `/numbers` HTTP endpoint built on axum.
//! - **`config`**: Command-line / environment configuration.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod merge;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;
