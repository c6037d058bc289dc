use clap::Parser;
use numbers_aggregator::aggregator::controller::Aggregator;
use numbers_aggregator::api::handlers::{AppState, router};
use numbers_aggregator::config::Config;
use numbers_aggregator::source::fetcher::HttpSourceFetcher;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    // 1. Source fetching:
    let fetcher = HttpSourceFetcher::with_connect_timeout(config.connect_timeout())?;

    // 2. Aggregation controller:
    let aggregator = Aggregator::new(Arc::new(fetcher));

    // 3. HTTP Router:
    let app = router(AppState {
        aggregator,
        timeout: config.request_timeout(),
    });

    // 4. Start HTTP server:
    tracing::info!(
        "HTTP server listening on {} (request timeout {:?})",
        config.http_addr,
        config.request_timeout()
    );
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
