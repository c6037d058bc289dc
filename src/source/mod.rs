//! Source Module
//!
//! Everything that touches a single remote source: admitting it, fetching it and
//! turning its payload into a sorted contribution.
//!
//! ## Responsibilities
//! - **Eligibility**: Rejecting malformed or non-HTTP addresses before any work is spawned.
//! - **Fetching**: Retrieving `{"numbers": [...]}` over HTTP, cooperatively cancellable.
//! - **Normalization**: Sorting each contribution ascending before it reaches the merge engine.
//!
//! ## Submodules
//! - **`types`**: `SourceDescriptor`, `FetchOutcome`, `FetchError` and the wire payload.
//! - **`validate`**: The address eligibility check.
//! - **`fetcher`**: The `SourceFetcher` seam and its reqwest-backed implementation.

pub mod fetcher;
pub mod types;
pub mod validate;
