//! `reqwest`-backed implementation of [`PullRequestHost`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Response};
use sizing::{FileChange, PullRequestHost, PullRequestRef, SizingError};

use crate::models::{AddLabelsRequest, ApiErrorBody, CreateCommentRequest, PullRequestFile};
use crate::GitHubError;

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

const USER_AGENT: &str = concat!("pr-size-labeler/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// Files per page requested from the file listing endpoint (GitHub's maximum).
const FILES_PER_PAGE: usize = 100;

/// GitHub stops listing after 3000 files; 30 pages of 100 cover that.
const MAX_FILE_PAGES: u32 = 30;

/// GitHub REST client authenticated with a single token.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GitHubClient {
    /// Public GitHub API root, used when `GITHUB_API_URL` is not set.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Creates a client for `api_url` (e.g. [`Self::DEFAULT_API_URL`] or a
    /// GitHub Enterprise Server `/api/v3` root).
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        })
    }

    fn issue_url(&self, pr: &PullRequestRef, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/{}",
            self.api_url,
            pr.owner,
            pr.repo,
            pr.number.as_u64(),
            suffix
        )
    }

    fn files_url(&self, pr: &PullRequestRef) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/files",
            self.api_url,
            pr.owner,
            pr.repo,
            pr.number.as_u64()
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GitHubError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(GitHubError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetches every page of the file listing.
    pub async fn fetch_files(
        &self,
        pr: &PullRequestRef,
    ) -> Result<Vec<PullRequestFile>, GitHubError> {
        let url = self.files_url(pr);
        let mut files = Vec::new();

        for page in 1..=MAX_FILE_PAGES {
            let request = self.http.get(&url).query(&[
                ("per_page", FILES_PER_PAGE.to_string()),
                ("page", page.to_string()),
            ]);
            let batch: Vec<PullRequestFile> = self.send(request).await?.json().await?;
            let last_page = batch.len() < FILES_PER_PAGE;
            tracing::debug!(page, count = batch.len(), "Fetched file page");
            files.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(files)
    }

    /// Adds `labels` to the pull request's issue.
    pub async fn post_labels(
        &self,
        pr: &PullRequestRef,
        labels: &[String],
    ) -> Result<(), GitHubError> {
        let request = self
            .http
            .post(self.issue_url(pr, "labels"))
            .json(&AddLabelsRequest { labels });
        self.send(request).await?;
        Ok(())
    }

    /// Posts an issue comment; pull requests share the issue comment thread.
    pub async fn post_comment(
        &self,
        pr: &PullRequestRef,
        body: &str,
    ) -> Result<(), GitHubError> {
        let request = self
            .http
            .post(self.issue_url(pr, "comments"))
            .json(&CreateCommentRequest { body });
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl PullRequestHost for GitHubClient {
    #[tracing::instrument(skip_all, fields(pr = %pr))]
    async fn list_files(&self, pr: &PullRequestRef) -> Result<Vec<FileChange>, SizingError> {
        let files = self
            .fetch_files(pr)
            .await
            .map_err(|e| SizingError::upstream("getting files info", e))?;
        Ok(files.into_iter().map(FileChange::from).collect())
    }

    #[tracing::instrument(skip_all, fields(pr = %pr, labels = ?labels))]
    async fn add_labels(
        &self,
        pr: &PullRequestRef,
        labels: &[String],
    ) -> Result<(), SizingError> {
        self.post_labels(pr, labels)
            .await
            .map_err(|e| SizingError::upstream("adding label", e))
    }

    #[tracing::instrument(skip_all, fields(pr = %pr))]
    async fn create_comment(&self, pr: &PullRequestRef, body: &str) -> Result<(), SizingError> {
        self.post_comment(pr, body)
            .await
            .map_err(|e| SizingError::upstream("adding comment", e))
    }
}
