//! HTTP API Module
//!
//! Exposes the aggregator over HTTP:
//!
//! `GET /numbers?u=http://host/a&u=http://host/b` -> `{"numbers":[...]}`
//!
//! The response is always `200 OK` with an ascending, duplicate-free list (empty when nothing
//! is eligible or nothing answered in time). The only error path is a failure to encode the
//! response body, which is reported as `500` instead of being replaced by an empty payload.
//!
//! ## Submodules
//! - **`handlers`**: Axum router, shared state and the `/numbers` handler.
//! - **`error`**: `ApiError` and its HTTP mapping.

pub mod error;
pub mod handlers;

/// Public endpoint answering aggregation requests.
pub const ENDPOINT_NUMBERS: &str = "/numbers";
/// Query parameter carrying one source address; repeated once per source.
pub const SOURCE_PARAM: &str = "u";
