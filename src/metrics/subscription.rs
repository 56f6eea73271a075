use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::service::{LoadStatus, MetricsQuery, MetricsService, MetricsView};
use crate::observability::api_stats;

/// Observable metrics state for one dashboard, driven by parameter changes
///
/// Every [`request`](Self::request) supersedes the ones before it. A superseded
/// fetch is aborted, and should its result still arrive it is dropped by a
/// generation check taken under the channel's write lock, so only the most
/// recently requested result is ever published.
pub struct MetricsSubscription {
    service: MetricsService,
    state: Arc<watch::Sender<MetricsView>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl MetricsSubscription {
    pub fn new(service: MetricsService) -> Self {
        let (state, _) = watch::channel(MetricsView::default());
        Self {
            service,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    /// Start fetching `query`, superseding any fetch still in flight
    ///
    /// The published view switches to `Loading` before this returns; the last
    /// committed series stays visible until the new one lands.
    pub fn request(&mut self, query: MetricsQuery) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!(generation, "Aborting superseded metrics fetch");
                previous.abort();
            }
        }

        self.state.send_modify(|view| {
            view.query = Some(query.clone());
            view.status = LoadStatus::Loading;
        });

        let service = self.service.clone();
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);

        self.in_flight = Some(tokio::spawn(async move {
            let view = service.load(&query).await;
            let committed = state.send_if_modified(|slot| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = view;
                true
            });

            if !committed {
                api_stats().record_stale_discarded();
                debug!(generation, query = %query, "Discarded stale metrics response");
            }
        }));

        generation
    }

    /// Periodic refresh of `query` that lets a slow fetch finish
    ///
    /// Unlike [`request`](Self::request), this does nothing while a fetch for
    /// the same query is still loading, so a backend slower than the refresh
    /// period still gets its result published. A different query supersedes
    /// as usual.
    pub fn refresh(&mut self, query: MetricsQuery) -> Option<u64> {
        let current = self.state.borrow();
        let same_query_loading = current.is_loading() && current.query.as_ref() == Some(&query);
        drop(current);

        if same_query_loading {
            debug!(query = %query, "Previous refresh still loading, skipping");
            return None;
        }
        Some(self.request(query))
    }

    /// Receiver that observes every committed view
    pub fn subscribe(&self) -> watch::Receiver<MetricsView> {
        self.state.subscribe()
    }

    pub fn current(&self) -> MetricsView {
        self.state.borrow().clone()
    }

    /// Generation number of the latest request, 0 before the first one
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Wait for the latest request to settle and return its view
    ///
    /// Returns the current view straight away when nothing was requested.
    pub async fn wait_until_settled(&self) -> MetricsView {
        let mut rx = self.state.subscribe();
        if rx.borrow().status == LoadStatus::Idle {
            return self.current();
        }

        let settled = match rx.wait_for(MetricsView::is_settled).await {
            Ok(view) => view.clone(),
            // The sender lives in `self`, so the channel cannot close while we wait
            Err(_) => self.current(),
        };
        settled
    }
}

impl Drop for MetricsSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
