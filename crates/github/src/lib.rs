//! GitHub infrastructure adapter.
//!
//! Implements the [`sizing::PullRequestHost`] port over the GitHub REST API
//! using `reqwest`, and decodes the pull request event payload that GitHub
//! Actions writes to `GITHUB_EVENT_PATH`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain sizing rules. All GitHub
//! API details (authentication headers, pagination, error bodies) are handled
//! here; the [`sizing`] and `labeler` crates never see them.
//!
//! ## Endpoints
//!
//! | Port method | Endpoint |
//! |-------------|----------|
//! | `list_files` | `GET /repos/{owner}/{repo}/pulls/{n}/files` |
//! | `add_labels` | `POST /repos/{owner}/{repo}/issues/{n}/labels` |
//! | `create_comment` | `POST /repos/{owner}/{repo}/issues/{n}/comments` |

pub mod client;
pub mod errors;
pub mod event;
pub mod models;

pub use client::GitHubClient;
pub use errors::GitHubError;
pub use event::{is_pull_request_event, PullRequestEvent};
