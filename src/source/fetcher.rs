//! Source Fetcher
//!
//! The seam between the aggregation controller and the outside world. A fetcher turns one
//! `SourceDescriptor` into a `FetchOutcome` and never reports an error upward: transport
//! failures, bad statuses, malformed bodies and cancellation all collapse to
//! `FetchOutcome::Absent` after being logged.
//!
//! ## Cancellation
//! Every await point is raced against the request's `CancellationToken`. When the token
//! fires the in-flight request future is dropped, which closes the underlying connection.

use super::types::{FetchError, FetchOutcome, NumbersPayload, SourceDescriptor};

use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Produces the contribution of a single source.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Must return promptly once `cancel` fires, holding no connection.
    async fn fetch(&self, source: &SourceDescriptor, cancel: &CancellationToken) -> FetchOutcome;
}

/// Fetches `{"numbers": [...]}` documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSourceFetcher {
    http_client: reqwest::Client,
}

impl HttpSourceFetcher {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Builds a fetcher with its own client using the given connect timeout.
    pub fn with_connect_timeout(connect_timeout: Duration) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self::new(http_client))
    }

    /// Downloads the raw body of `source`, or fails with `FetchError::Cancelled`.
    pub async fn retrieve(
        &self,
        source: &SourceDescriptor,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, FetchError> {
        let request = async {
            let response = self
                .http_client
                .get(source.url().clone())
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status));
            }

            Ok::<_, FetchError>(response.bytes().await?.to_vec())
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = request => result,
        }
    }

    async fn fetch_numbers(
        &self,
        source: &SourceDescriptor,
        cancel: &CancellationToken,
    ) -> Result<Vec<i64>, FetchError> {
        let body = self.retrieve(source, cancel).await?;
        decode_numbers(&body)
    }
}

impl Default for HttpSourceFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, source: &SourceDescriptor, cancel: &CancellationToken) -> FetchOutcome {
        match self.fetch_numbers(source, cancel).await {
            Ok(numbers) => {
                tracing::debug!(source = %source, count = numbers.len(), "Source answered");
                FetchOutcome::Contribution(numbers)
            }
            Err(FetchError::Cancelled) => {
                tracing::debug!(source = %source, "Fetch abandoned after cancellation");
                FetchOutcome::Absent
            }
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Source contributed nothing");
                FetchOutcome::Absent
            }
        }
    }
}

/// Parses a `{"numbers": [...]}` body and sorts the numbers ascending.
pub fn decode_numbers(body: &[u8]) -> Result<Vec<i64>, FetchError> {
    let payload: NumbersPayload = serde_json::from_slice(body)?;
    let mut numbers = payload.numbers;
    numbers.sort_unstable();
    Ok(numbers)
}
