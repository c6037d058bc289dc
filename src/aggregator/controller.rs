//! Fan-out / Fan-in Controller
//!
//! Drives one `Aggregation` per request: spawns the fetches, races their results against the
//! deadline, and tears every fetch down before handing the answer back.

use super::state::Aggregation;
use super::types::{AggregationReport, AggregationState};
use crate::source::fetcher::SourceFetcher;
use crate::source::types::{FetchOutcome, SourceDescriptor};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

/// Counts a spawned fetch until its future is dropped, whether it finished or was aborted.
struct InFlightGuard {
    counter: Arc<AtomicUsize>,
}

impl InFlightGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Stateless between requests apart from the in-flight gauge.
pub struct Aggregator {
    fetcher: Arc<dyn SourceFetcher>,
    in_flight: Arc<AtomicUsize>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn SourceFetcher>) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Fetch tasks spawned by this aggregator that have not terminated yet.
    pub fn outstanding_fetches(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Sorted, distinct union of the numbers exposed by `raw_sources`, as gathered within
    /// `timeout`. Ineligible addresses are skipped; never fails.
    pub async fn aggregate<S: AsRef<str>>(&self, raw_sources: &[S], timeout: Duration) -> Vec<i64> {
        self.run(raw_sources, timeout).await.numbers
    }

    /// Same as [`aggregate`](Self::aggregate) but returns the full report.
    pub async fn run<S: AsRef<str>>(&self, raw_sources: &[S], timeout: Duration) -> AggregationReport {
        let sources: Vec<SourceDescriptor> = raw_sources
            .iter()
            .filter_map(|raw| {
                let descriptor = SourceDescriptor::parse(raw.as_ref());
                if descriptor.is_none() {
                    tracing::debug!("Skipping ineligible source {:?}", raw.as_ref());
                }
                descriptor
            })
            .collect();

        let span = tracing::info_span!(
            "aggregate",
            request_id = %Uuid::new_v4(),
            requested = raw_sources.len(),
            eligible = sources.len(),
        );

        self.run_sources(sources, timeout).instrument(span).await
    }

    /// Runs an aggregation over already admitted sources.
    pub async fn run_sources(
        &self,
        sources: Vec<SourceDescriptor>,
        timeout: Duration,
    ) -> AggregationReport {
        let mut aggregation = Aggregation::new();

        if aggregation.begin(sources.len()) == AggregationState::Finalized {
            tracing::info!("No eligible sources, answering with an empty aggregate");
            return aggregation.into_report();
        }

        let deadline = Instant::now() + timeout;
        let cancel = CancellationToken::new();
        // One slot per fetch so no fetch ever waits to hand its result back
        let (tx, mut rx) = mpsc::channel::<FetchOutcome>(sources.len());
        let mut fetches = JoinSet::new();

        for source in sources {
            let tx = tx.clone();
            let cancel = cancel.clone();
            let fetcher = self.fetcher.clone();
            let guard = InFlightGuard::new(self.in_flight.clone());

            fetches.spawn(async move {
                let _guard = guard;
                let outcome = fetcher.fetch(&source, &cancel).await;
                if cancel.is_cancelled() {
                    return;
                }
                if tx.try_send(outcome).is_err() {
                    tracing::debug!(source = %source, "Result dropped, request already finalized");
                }
            });
        }
        drop(tx);

        tracing::debug!("Dispatched {} fetches", fetches.len());

        let expiry = tokio::time::sleep_until(deadline);
        tokio::pin!(expiry);

        while !aggregation.is_finalized() {
            tokio::select! {
                biased;
                received = rx.recv() => match received {
                    Some(outcome) => {
                        aggregation.record(outcome);
                        tracing::trace!("Aggregate now holds {} numbers", aggregation.current().len());
                    }
                    None => {
                        tracing::warn!("All fetch tasks ended before reporting");
                        aggregation.close();
                    }
                },
                _ = &mut expiry => {
                    tracing::info!("Deadline reached, finalizing with a partial aggregate");
                    aggregation.expire();
                }
            }
        }

        cancel.cancel();
        fetches.shutdown().await;

        let report = aggregation.into_report();
        tracing::info!(
            dispatched = report.dispatched,
            received = report.received,
            timed_out = report.timed_out,
            numbers = report.numbers.len(),
            "Aggregation finalized"
        );
        report
    }
}
