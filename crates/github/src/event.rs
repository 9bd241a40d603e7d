//! GitHub Actions pull request event payload.
//!
//! Actions writes the webhook payload that triggered the workflow to the file
//! named by `GITHUB_EVENT_PATH`. Only the handful of fields needed to address
//! the pull request and read its totals are decoded.

use std::path::Path;

use serde::Deserialize;
use sizing::{PullRequestNumber, PullRequestRef, RepositoryName, RepositoryOwner};

use crate::GitHubError;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// Event names that carry a pull request payload.
const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// Returns `true` if `event_name` (from `GITHUB_EVENT_NAME`) is a pull
/// request event.
pub fn is_pull_request_event(event_name: &str) -> bool {
    PULL_REQUEST_EVENTS.contains(&event_name)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
    #[serde(default)]
    pub repository: Option<RepositoryPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub additions: Option<u64>,
    #[serde(default)]
    pub deletions: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerPayload {
    #[serde(default)]
    pub login: Option<String>,
}

impl PullRequestEvent {
    /// Reads and decodes the payload at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GitHubError> {
        let path = path.as_ref();
        let payload_error = |message: String| GitHubError::EventPayload {
            path: path.display().to_string(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| payload_error(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| payload_error(e.to_string()))
    }

    /// Resolves the pull request coordinates.
    ///
    /// The owner and repository name come from the payload; if absent they
    /// fall back to `fallback_repository` in `owner/repo` form (the value of
    /// `GITHUB_REPOSITORY`).
    pub fn pull_request_ref(
        &self,
        fallback_repository: Option<&str>,
    ) -> Result<PullRequestRef, GitHubError> {
        let number = self
            .number
            .or_else(|| self.pull_request.as_ref().and_then(|pr| pr.number))
            .ok_or(GitHubError::MissingEventField {
                field: "pull request number",
            })?;

        let repository = self.repository.as_ref();
        let payload_owner = repository
            .and_then(|r| r.owner.as_ref())
            .and_then(|o| o.login.clone())
            .filter(|login| !login.is_empty());
        let payload_name = repository
            .and_then(|r| r.name.clone())
            .filter(|name| !name.is_empty());
        let (fallback_owner, fallback_name) = fallback_repository
            .and_then(|full| full.split_once('/'))
            .map(|(o, n)| (Some(o.to_owned()), Some(n.to_owned())))
            .unwrap_or_default();

        let owner = payload_owner
            .or(fallback_owner)
            .and_then(RepositoryOwner::new)
            .ok_or(GitHubError::MissingEventField {
                field: "repository owner",
            })?;
        let repo = payload_name
            .or(fallback_name)
            .and_then(RepositoryName::new)
            .ok_or(GitHubError::MissingEventField {
                field: "repository name",
            })?;

        Ok(PullRequestRef {
            owner,
            repo,
            number: PullRequestNumber::new(number),
        })
    }

    /// Returns `(additions, deletions)` if the payload carries both.
    pub fn totals(&self) -> Option<(u64, u64)> {
        let pr = self.pull_request.as_ref()?;
        Some((pr.additions?, pr.deletions?))
    }
}
