//! Pull request size labeler orchestration.
//!
//! [`SizeLabeler`] sequences the calls between the pure rules in [`sizing`]
//! and a [`sizing::PullRequestHost`]: pick an aggregation strategy, classify,
//! label, and on the largest bucket comment and optionally fail.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** No sizing rules live here, and no transport
//! details either. Every host call is a single attempt; the first error ends
//! the run and nothing already applied is rolled back.

use sizing::{
    classify, ChangeSet, ChangeVolume, PullRequestHost, PullRequestRef, SizeBucket, SizingError,
    SizingPolicy,
};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Result of a successful labeling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Aggregated change volume after ignore filtering.
    pub volume: ChangeVolume,
    /// Bucket derived from `volume`.
    pub bucket: SizeBucket,
    /// Whether the XL comment was posted.
    pub commented: bool,
}

/// Applies the size label for one pull request.
pub struct SizeLabeler<H> {
    host: H,
    policy: SizingPolicy,
}

impl<H: PullRequestHost> SizeLabeler<H> {
    pub fn new(host: H, policy: SizingPolicy) -> Self {
        Self { host, policy }
    }

    /// Gathers the change data for `pr`.
    ///
    /// `totals` are the pull-request-level `(additions, deletions)` if the
    /// caller already has them (the Actions event payload usually does). They
    /// are used only when no ignore patterns are configured, since patterns
    /// need per-file data; otherwise the file list is fetched from the host.
    pub async fn collect_changes(
        &self,
        pr: &PullRequestRef,
        totals: Option<(u64, u64)>,
    ) -> Result<ChangeSet, SizingError> {
        match totals {
            Some((additions, deletions)) if self.policy.ignore.is_empty() => {
                tracing::debug!(additions, deletions, "Using pull request totals");
                Ok(ChangeSet::Summary {
                    additions,
                    deletions,
                })
            }
            _ => {
                let files = self.host.list_files(pr).await?;
                tracing::debug!(files = files.len(), "Fetched changed files");
                Ok(ChangeSet::Files(files))
            }
        }
    }

    /// Classifies `changes` and applies the outcome to `pr`.
    ///
    /// Returns [`SizingError::Oversized`] when the bucket is XL and the policy
    /// says to fail, but only after the label and comment were applied.
    pub async fn apply(
        &self,
        pr: &PullRequestRef,
        changes: &ChangeSet,
    ) -> Result<Verdict, SizingError> {
        let volume = changes.volume(&self.policy.ignore);
        let bucket = classify(&self.policy.thresholds, volume);
        tracing::info!(
            %volume,
            %bucket,
            strategy = changes.strategy(),
            "Classified pull request"
        );

        self.host
            .add_labels(pr, &[bucket.label().to_owned()])
            .await?;

        if !bucket.is_largest() {
            tracing::info!(label = bucket.label(), "Pull request successfully labeled");
            return Ok(Verdict {
                volume,
                bucket,
                commented: false,
            });
        }

        // GitHub rejects blank comment bodies.
        let commented = if self.policy.message_if_xl.trim().is_empty() {
            tracing::debug!("No XL message configured, skipping comment");
            false
        } else {
            self.host
                .create_comment(pr, &self.policy.message_if_xl)
                .await?;
            true
        };

        if self.policy.fail_if_xl {
            tracing::error!(%volume, "Pull request exceeds the largest size threshold");
            return Err(SizingError::Oversized { bucket });
        }

        tracing::warn!(%volume, "Pull request labeled as XL");
        Ok(Verdict {
            volume,
            bucket,
            commented,
        })
    }

    /// Runs [`Self::collect_changes`] followed by [`Self::apply`].
    pub async fn run(
        &self,
        pr: &PullRequestRef,
        totals: Option<(u64, u64)>,
    ) -> Result<Verdict, SizingError> {
        let changes = self.collect_changes(pr, totals).await?;
        self.apply(pr, &changes).await
    }
}
