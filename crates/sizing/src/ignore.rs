//! File ignore patterns.
//!
//! A pattern is either an exact filename or a rule containing `*`. Wildcard
//! rules are matched by taking the text after the first `*` and testing
//! whether the filename *contains* it. This is deliberately not an anchored
//! suffix match: `*.go` ignores `main.go` but also `main.go.orig`. Users
//! expecting true glob semantics should spell patterns accordingly.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;

/// An ordered set of ignore patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorePatterns(Vec<String>);

impl IgnorePatterns {
    /// Creates a pattern set from already-split patterns.
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    /// Parses a whitespace-separated list, e.g. `"Cargo.lock *.snap"`.
    pub fn from_whitespace_separated(raw: &str) -> Self {
        Self(raw.split_whitespace().map(str::to_owned).collect())
    }

    /// Returns `true` if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the patterns as string slices.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Returns `true` if `filename` matches any of `patterns`.
///
/// See the module documentation for the wildcard rule.
pub fn is_ignorable(filename: &str, patterns: &IgnorePatterns) -> bool {
    patterns
        .as_slice()
        .iter()
        .any(|pattern| matches_pattern(filename, pattern))
}

fn matches_pattern(filename: &str, pattern: &str) -> bool {
    if pattern.contains('*') {
        // The piece between the first and second `*` (or the end).
        let fragment = pattern.split('*').nth(1).unwrap_or_default();
        if filename.contains(fragment) {
            return true;
        }
    }
    filename == pattern
}
