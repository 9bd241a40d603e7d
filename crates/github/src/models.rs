//! Wire types for the GitHub REST endpoints the adapter calls.

use serde::{Deserialize, Serialize};
use sizing::FileChange;

/// One entry of `GET /repos/{owner}/{repo}/pulls/{n}/files`.
///
/// Only the fields the labeler reads are modelled. `changes` is additions
/// plus deletions as computed by GitHub.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    #[serde(default)]
    pub changes: u64,
}

impl From<PullRequestFile> for FileChange {
    fn from(file: PullRequestFile) -> Self {
        FileChange::new(file.filename, file.changes)
    }
}

/// Body of `POST /repos/{owner}/{repo}/issues/{n}/labels`.
#[derive(Debug, Serialize)]
pub struct AddLabelsRequest<'a> {
    pub labels: &'a [String],
}

/// Body of `POST /repos/{owner}/{repo}/issues/{n}/comments`.
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub body: &'a str,
}

/// Error body returned by the GitHub API on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
