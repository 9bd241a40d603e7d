//! GitHub adapter errors.
//!
//! These never cross the port boundary as-is: [`crate::GitHubClient`] turns
//! them into [`sizing::SizingError::Upstream`] tagged with the operation that
//! failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("GitHub API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, or the raw body.
        message: String,
    },

    /// The event payload file was missing, unreadable, or not valid JSON.
    #[error("Event payload '{path}' could not be read: {message}")]
    EventPayload { path: String, message: String },

    /// The event payload did not identify a pull request.
    #[error("Event payload is missing {field}")]
    MissingEventField { field: &'static str },
}
