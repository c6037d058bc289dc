use super::error::ApiError;
use super::{ENDPOINT_NUMBERS, SOURCE_PARAM};
use crate::aggregator::controller::Aggregator;
use crate::source::types::NumbersPayload;

use axum::extract::{RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    /// Deadline applied to every request.
    pub timeout: Duration,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ENDPOINT_NUMBERS, get(handle_numbers))
        .with_state(state)
}

/// `GET /numbers?u=...&u=...`
pub async fn handle_numbers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let sources = source_params(query.as_deref().unwrap_or_default());
    tracing::debug!("Received /numbers request with {} source(s)", sources.len());

    let numbers = state.aggregator.aggregate(&sources, state.timeout).await;
    let body = encode_json(&NumbersPayload { numbers })?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// Every `u` value in query order. Repeated keys are kept, other keys are ignored.
pub fn source_params(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == SOURCE_PARAM)
        .map(|(_, value)| value.into_owned())
        .collect()
}

pub fn encode_json<T: Serialize>(payload: &T) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(payload).map_err(ApiError::Encode)
}
