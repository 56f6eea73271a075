// Seam between metrics derivation and the transport that supplies the series

use async_trait::async_trait;

use crate::api::{Aggregation, ApiClient, ApiError, Metric, RepoId};

/// Anything that can produce a metrics series for a repository
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch_metrics(
        &self,
        repo: &RepoId,
        aggregation: Aggregation,
    ) -> Result<Vec<Metric>, ApiError>;
}

#[async_trait]
impl MetricsSource for ApiClient {
    async fn fetch_metrics(
        &self,
        repo: &RepoId,
        aggregation: Aggregation,
    ) -> Result<Vec<Metric>, ApiError> {
        ApiClient::fetch_metrics(self, repo, aggregation).await
    }
}
