use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::source::MetricsSource;
use super::summary::MetricsSummary;
use crate::api::{Aggregation, RepoId};

/// Parameters identifying one metrics fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricsQuery {
    pub repo: RepoId,
    pub aggregation: Aggregation,
}

impl MetricsQuery {
    pub fn new(repo: RepoId, aggregation: Aggregation) -> Self {
        Self { repo, aggregation }
    }
}

impl fmt::Display for MetricsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.repo, self.aggregation)
    }
}

/// Where a view is in its fetch lifecycle
///
/// The numbers in [`MetricsView::summary`] are zeroed for both `Empty` and
/// `Failed`; the status is what tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    Loading,
    Ready,
    Empty,
    Failed { reason: String },
}

/// What a dashboard displays for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    pub query: Option<MetricsQuery>,
    pub status: LoadStatus,
    pub summary: MetricsSummary,
}

impl Default for MetricsView {
    fn default() -> Self {
        Self {
            query: None,
            status: LoadStatus::Idle,
            summary: MetricsSummary::default(),
        }
    }
}

impl MetricsView {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Settled means a fetch finished, whatever its outcome
    pub fn is_settled(&self) -> bool {
        !matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    fn finished(query: &MetricsQuery, status: LoadStatus, summary: MetricsSummary) -> Self {
        Self {
            query: Some(query.clone()),
            status,
            summary,
        }
    }
}

/// Fetches a series and derives the dashboard aggregates from it
///
/// Never fails: transport errors, error statuses and malformed payloads all
/// come back as an empty, zeroed view and are only reported in the logs.
#[derive(Clone)]
pub struct MetricsService {
    source: Arc<dyn MetricsSource>,
}

impl MetricsService {
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn load(&self, query: &MetricsQuery) -> MetricsView {
        match self
            .source
            .fetch_metrics(&query.repo, query.aggregation)
            .await
        {
            Ok(series) if series.is_empty() => {
                debug!("Backend returned no periods");
                MetricsView::finished(query, LoadStatus::Empty, MetricsSummary::default())
            }
            Ok(series) => {
                debug!(periods = series.len(), "Derived metrics summary");
                MetricsView::finished(query, LoadStatus::Ready, MetricsSummary::from_series(series))
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Error fetching metrics");
                MetricsView::finished(
                    query,
                    LoadStatus::Failed {
                        reason: e.to_string(),
                    },
                    MetricsSummary::default(),
                )
            }
        }
    }
}
