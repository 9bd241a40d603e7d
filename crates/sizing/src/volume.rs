//! Change volume and the two aggregation strategies.
//!
//! The code host reports changes either per file (which allows ignore
//! patterns to be applied) or as a pull-request-level additions/deletions
//! pair. Both shapes are variants of [`ChangeSet`] and reduce to a single
//! [`ChangeVolume`] fed to [`crate::classify`].

use serde::{Deserialize, Serialize};

use crate::{is_ignorable, IgnorePatterns};

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;

/// Aggregate number of added plus deleted lines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChangeVolume(i64);

impl ChangeVolume {
    /// Creates a [`ChangeVolume`] from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Converts an unsigned line count, clamping at `i64::MAX`.
    pub fn from_count(count: u64) -> Self {
        Self(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

impl std::fmt::Display for ChangeVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for ChangeVolume {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for ChangeVolume {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

// ---------------------------------------------------------------------------

/// Changes to a single file in a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path relative to the repository root.
    pub filename: String,

    /// Additions plus deletions for this file.
    pub changes: u64,
}

impl FileChange {
    pub fn new(filename: impl Into<String>, changes: u64) -> Self {
        Self {
            filename: filename.into(),
            changes,
        }
    }
}

// ---------------------------------------------------------------------------

/// The change data available for a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeSet {
    /// Per-file change counts. Ignore patterns apply.
    Files(Vec<FileChange>),

    /// Pull-request-level totals. Ignore patterns cannot apply and are unused.
    Summary { additions: u64, deletions: u64 },
}

impl ChangeSet {
    /// Reduces the change set to a single volume.
    ///
    /// For [`ChangeSet::Files`] every file matching `ignore` is skipped. The
    /// pattern check is skipped entirely when `ignore` is empty. Sums saturate
    /// at `i64::MAX` rather than wrapping.
    pub fn volume(&self, ignore: &IgnorePatterns) -> ChangeVolume {
        match self {
            Self::Files(files) => {
                let check_ignorable = !ignore.is_empty();
                let mut total = ChangeVolume::default();
                for file in files {
                    if check_ignorable && is_ignorable(&file.filename, ignore) {
                        tracing::debug!(
                            filename = %file.filename,
                            changes = file.changes,
                            "Ignoring file"
                        );
                        continue;
                    }
                    total += ChangeVolume::from_count(file.changes);
                }
                total
            }
            Self::Summary {
                additions,
                deletions,
            } => ChangeVolume::from_count(*additions) + ChangeVolume::from_count(*deletions),
        }
    }

    /// Short name of the aggregation strategy, used in log fields.
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Files(_) => "files",
            Self::Summary { .. } => "summary",
        }
    }
}
