//! Fatal error taxonomy for a labeler run.
//!
//! Every variant of [`SizingError`] ends the run: there is no retry and no
//! rollback. A label applied before a later failure stays applied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SizeBucket;

/// Errors that terminate a labeler run.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SizingError {
    /// Startup configuration is missing or malformed.
    ///
    /// Produced by: input loading (missing token, unparseable thresholds or
    /// flags, no event payload path).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A call to the code host failed, or the event describing the pull
    /// request could not be read.
    ///
    /// Transient and permanent failures are not distinguished; both are fatal
    /// on first occurrence.
    #[error("Error happened while {operation}: {message}")]
    Upstream {
        /// What the labeler was doing, e.g. `"adding label"`.
        operation: String,
        /// The underlying failure, rendered as text.
        message: String,
    },

    /// The pull request reached the largest bucket and the policy requires
    /// the run to fail.
    ///
    /// Only produced after the label and comment were applied successfully.
    #[error("PR size is {bucket}, make it shorter, please!")]
    Oversized {
        /// The bucket that triggered the failure (always [`SizeBucket::Xl`]).
        bucket: SizeBucket,
    },
}

impl SizingError {
    /// Builds a [`SizingError::Configuration`] from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Builds a [`SizingError::Upstream`] for the given operation.
    pub fn upstream(operation: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Upstream {
            operation: operation.into(),
            message: source.to_string(),
        }
    }
}
