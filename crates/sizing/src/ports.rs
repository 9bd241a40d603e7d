//! Port trait for the code host.
//!
//! The labeler needs exactly three capabilities from the host: list a pull
//! request's changed files, add labels, and post a comment. Infrastructure
//! crates (see `github`) implement [`PullRequestHost`]; tests substitute an
//! in-memory fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{FileChange, PullRequestNumber, RepositoryName, RepositoryOwner, SizingError};

/// Coordinates of one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub owner: RepositoryOwner,
    pub repo: RepositoryName,
    pub number: PullRequestNumber,
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}{}", self.owner, self.repo, self.number)
    }
}

/// Operations the labeler performs against the code host.
///
/// Every method is a single attempt. Implementations must not retry; any
/// error is surfaced as [`SizingError::Upstream`] and ends the run.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Lists every file changed by the pull request with its change count.
    async fn list_files(&self, pr: &PullRequestRef) -> Result<Vec<FileChange>, SizingError>;

    /// Adds `labels` to the pull request. Existing labels are left in place.
    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String])
        -> Result<(), SizingError>;

    /// Posts a top-level comment on the pull request.
    async fn create_comment(&self, pr: &PullRequestRef, body: &str) -> Result<(), SizingError>;
}
