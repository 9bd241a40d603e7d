//! Core sizing domain for the pull request size labeler.
//!
//! This crate contains the classification rules, the ignore-pattern filter, the
//! two change-volume aggregation strategies, and the port trait through which
//! the labeler talks to the code host. Infrastructure crates implement the
//! port; they never add sizing rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Every function outside [`ports`] is pure and safe to call concurrently.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`bucket`] | [`SizeBucket`] and the [`classify`] threshold ladder |
//! | [`ignore`] | [`IgnorePatterns`] and the [`is_ignorable`] predicate |
//! | [`volume`] | [`ChangeSet`] aggregation strategies and [`ChangeVolume`] |
//! | [`policy`] | [`Thresholds`] and the immutable [`SizingPolicy`] |
//! | [`identifiers`] | Newtype identifiers (`RepositoryOwner`, `PullRequestNumber`, etc.) |
//! | [`ports`] | The [`PullRequestHost`] trait implemented by infrastructure |
//! | [`errors`] | [`SizingError`], the fatal error taxonomy |

pub mod bucket;
pub mod errors;
pub mod identifiers;
pub mod ignore;
pub mod policy;
pub mod ports;
pub mod volume;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use bucket::{classify, SizeBucket};
pub use errors::SizingError;
pub use identifiers::{PullRequestNumber, RepositoryName, RepositoryOwner, RunId};
pub use ignore::{is_ignorable, IgnorePatterns};
pub use policy::{SizingPolicy, Thresholds};
pub use ports::{PullRequestHost, PullRequestRef};
pub use volume::{ChangeSet, ChangeVolume, FileChange};
