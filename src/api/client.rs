use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::errors::ApiError;
use super::types::*;
use crate::config::ApiConfig;
use crate::observability::{api_stats, OperationTimer};

const USER_AGENT: &str = concat!("codevigil/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the CodeVigil backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;

        // No timeout unless configured: the platform default applies
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client with default settings pointing at `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/repositories`
    #[instrument(skip(self))]
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, ApiError> {
        let url = self.endpoint(&["api", "repositories"])?;
        let response: RepositoriesResponse = self.get_json(url).await?;
        debug!(count = response.repositories.len(), "Fetched repositories");
        Ok(response.repositories)
    }

    /// `GET /api/repositories/{owner}/{repo}/metrics?aggregation=...`
    #[instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn fetch_metrics(
        &self,
        repo: &RepoId,
        aggregation: Aggregation,
    ) -> Result<Vec<Metric>, ApiError> {
        let mut url = self.endpoint(&["api", "repositories", &repo.owner, &repo.name, "metrics"])?;
        url.query_pairs_mut()
            .append_pair("aggregation", aggregation.as_str());

        let response: MetricsResponse = self.get_json(url).await?;
        debug!(periods = response.metrics.len(), "Fetched metrics series");
        Ok(response.metrics)
    }

    /// `POST /api/repositories` with `{ repo_url }`
    ///
    /// The body is interpreted whatever the HTTP status, since the backend
    /// reports rejections through `status` and `message`.
    #[instrument(skip(self))]
    pub async fn add_repository(&self, repo_url: &str) -> Result<RepoId, ApiError> {
        let url = self.endpoint(&["api", "repositories"])?;
        let _timer = OperationTimer::new("add_repository");
        api_stats().record_request();

        let result = self.post_repository(url, repo_url).await;
        if let Err(e) = &result {
            api_stats().record_error();
            warn!(kind = e.kind(), error = %e, "Add repository failed");
        }
        result
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let _timer = OperationTimer::new(url.path());
        api_stats().record_request();

        let result = self.send_get(url.clone()).await;
        if let Err(e) = &result {
            api_stats().record_error();
            debug!(kind = e.kind(), url = %url, "GET failed");
        }
        result
    }

    async fn send_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Http { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_repository(&self, url: Url, repo_url: &str) -> Result<RepoId, ApiError> {
        let response = self
            .http
            .post(url)
            .json(&AddRepositoryRequest {
                repo_url: repo_url.to_string(),
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = match serde_json::from_str::<AddRepositoryResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => return Err(ApiError::Http { status, body }),
            Err(e) => return Err(ApiError::Decode(e)),
        };

        match (parsed.is_success(), parsed.repository) {
            (true, Some(repo)) => Ok(RepoId::new(repo.owner, repo.name)),
            (true, None) => Err(ApiError::Rejected(
                "Backend reported success without repository details".to_string(),
            )),
            (false, _) => Err(ApiError::Rejected(
                parsed
                    .message
                    .unwrap_or_else(|| "Failed to add repository".to_string()),
            )),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}
