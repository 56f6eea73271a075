use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One bucket of pull request activity for a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub total_prs: u64,
    pub merged_prs: u64,
    pub reviewed_prs: u64,
    pub median_merge_time_seconds: f64,
    pub median_review_turnaround_seconds: f64,
    /// Pre-formatted by the backend, display only
    #[serde(default)]
    pub median_merge_time: String,
    #[serde(default)]
    pub median_review_turnaround: String,
}

/// A repository tracked by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub url: String,
}

impl Repository {
    pub fn id(&self) -> RepoId {
        RepoId::new(&self.owner, &self.name)
    }
}

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected repository in owner/name form, got '{0}'")]
pub struct RepoIdParseError(pub String);

impl FromStr for RepoId {
    type Err = RepoIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoId::new(owner, name))
            }
            _ => Err(RepoIdParseError(s.to_string())),
        }
    }
}

/// Time bucketing granularity for a metrics series
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Daily,
    #[default]
    Weekly,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Daily => "daily",
            Aggregation::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Aggregation::Daily),
            "weekly" => Ok(Aggregation::Weekly),
            other => Err(format!("unknown aggregation '{other}' (expected daily or weekly)")),
        }
    }
}

/// `null` and a missing field both decode as an empty list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoriesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRepositoryRequest {
    pub repo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedRepository {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRepositoryResponse {
    pub status: String,
    #[serde(default)]
    pub repository: Option<AddedRepository>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AddRepositoryResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
