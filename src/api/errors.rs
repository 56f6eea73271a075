use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the CodeVigil backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Short label used in logs and the dashboard failure banner
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl(_) => "config",
            ApiError::Request(e) if e.is_timeout() => "timeout",
            ApiError::Request(e) if e.is_decode() => "malformed",
            ApiError::Request(_) => "network",
            ApiError::Http { .. } => "http",
            ApiError::Decode(_) => "malformed",
            ApiError::Rejected(_) => "rejected",
        }
    }
}
