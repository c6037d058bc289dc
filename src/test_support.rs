//! Shared fixtures for unit tests: local HTTP sources and in-memory fetchers.

use crate::source::fetcher::SourceFetcher;
use crate::source::types::{FetchOutcome, SourceDescriptor};

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How a local test source answers.
#[derive(Debug, Clone)]
pub struct SourceRoute {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl SourceRoute {
    pub fn numbers(numbers: &[i64]) -> Self {
        Self {
            status: StatusCode::OK,
            body: serde_json::json!({ "numbers": numbers }).to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Starts an axum server on `127.0.0.1:0` serving the given routes.
pub async fn spawn_source_server(routes: Vec<(&'static str, SourceRoute)>) -> SocketAddr {
    let mut app = Router::new();
    for (path, route) in routes {
        app = app.route(
            path,
            get(move || {
                let route = route.clone();
                async move {
                    tokio::time::sleep(route.delay).await;
                    (
                        route.status,
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        route.body,
                    )
                }
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn source(addr: SocketAddr, path: &str) -> SourceDescriptor {
    SourceDescriptor::parse(&format!("http://{}{}", addr, path)).unwrap()
}

/// Scripted fetcher keyed by URL. Unknown URLs answer `Absent` immediately.
pub struct ScriptedFetcher {
    script: HashMap<String, (Duration, FetchOutcome)>,
    honour_cancel: bool,
    pub delivered: Arc<AtomicUsize>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            honour_cancel: true,
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fetcher that keeps sleeping after cancellation; only an abort can stop it.
    pub fn ignoring_cancel() -> Self {
        Self {
            honour_cancel: false,
            ..Self::new()
        }
    }

    pub fn answer(mut self, url: &str, delay: Duration, outcome: FetchOutcome) -> Self {
        self.script.insert(url.to_string(), (delay, outcome));
        self
    }
}

#[async_trait]
impl SourceFetcher for ScriptedFetcher {
    async fn fetch(&self, source: &SourceDescriptor, cancel: &CancellationToken) -> FetchOutcome {
        let Some((delay, outcome)) = self.script.get(source.url().as_str()).cloned() else {
            return FetchOutcome::Absent;
        };

        if self.honour_cancel {
            tokio::select! {
                _ = cancel.cancelled() => return FetchOutcome::Absent,
                _ = tokio::time::sleep(delay) => {}
            }
        } else {
            tokio::time::sleep(delay).await;
        }

        self.delivered.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}
