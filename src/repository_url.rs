use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::api::RepoId;

static GITHUB_REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/?$").expect("static regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoUrlError {
    #[error("Please enter a repository URL")]
    Missing,
    #[error("Please enter a valid GitHub repository URL (e.g., https://github.com/owner/repo)")]
    Invalid,
}

/// Check a repository URL before it is submitted to the backend
///
/// Returns the owner/name the URL points at.
pub fn validate_repo_url(url: &str) -> Result<RepoId, RepoUrlError> {
    if url.is_empty() {
        return Err(RepoUrlError::Missing);
    }
    let captures = GITHUB_REPO_URL.captures(url).ok_or(RepoUrlError::Invalid)?;
    Ok(RepoId::new(&captures[1], &captures[2]))
}
