//! The immutable sizing policy loaded once per run.

use serde::{Deserialize, Serialize};

use crate::IgnorePatterns;

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

/// Exclusive upper bounds for the XS, S, M and L buckets.
///
/// Anything at or above `l_max` is XL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub xs_max: i64,
    pub s_max: i64,
    pub m_max: i64,
    pub l_max: i64,
}

impl Thresholds {
    /// Returns `true` if the boundaries are strictly ascending.
    ///
    /// Non-ascending thresholds are still usable; [`crate::classify`] applies
    /// them in fixed order. Callers use this to warn about the misconfiguration.
    pub fn is_ascending(&self) -> bool {
        self.xs_max < self.s_max && self.s_max < self.m_max && self.m_max < self.l_max
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            xs_max: 10,
            s_max: 100,
            m_max: 500,
            l_max: 1000,
        }
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "xs<{} s<{} m<{} l<{}",
            self.xs_max, self.s_max, self.m_max, self.l_max
        )
    }
}

// ---------------------------------------------------------------------------

/// Everything that decides how a pull request is sized and what happens when
/// it is too large.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingPolicy {
    /// Bucket boundaries.
    pub thresholds: Thresholds,

    /// Fail the run when the pull request lands in the XL bucket.
    pub fail_if_xl: bool,

    /// Comment body posted on XL pull requests. May be empty.
    pub message_if_xl: String,

    /// Files excluded from the change volume. Only honoured by the per-file
    /// aggregation strategy.
    pub ignore: IgnorePatterns,
}
