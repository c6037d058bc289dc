//! Source Data Types

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// An admitted remote source.
///
/// Only constructible through [`SourceDescriptor::parse`], so holding one means the
/// address already passed the eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    url: Url,
}

impl SourceDescriptor {
    /// Returns `None` when `raw` is not an eligible source address.
    pub fn parse(raw: &str) -> Option<Self> {
        if !super::validate::is_eligible_source(raw) {
            return None;
        }
        Url::parse(raw).ok().map(|url| Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// What a single fetch hands back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Ascending sequence; may still contain repeated values.
    Contribution(Vec<i64>),
    /// Failure, bad payload or cancellation. Contributes nothing.
    Absent,
}

impl FetchOutcome {
    pub fn into_contribution(self) -> Option<Vec<i64>> {
        match self {
            FetchOutcome::Contribution(numbers) => Some(numbers),
            FetchOutcome::Absent => None,
        }
    }
}

/// Why a fetch produced no contribution. Only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("source answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch cancelled")]
    Cancelled,
}

/// Wire format shared by sources and the `/numbers` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersPayload {
    pub numbers: Vec<i64>,
}
