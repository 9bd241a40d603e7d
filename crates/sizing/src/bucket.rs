//! Size buckets and the threshold ladder that assigns them.

use serde::{Deserialize, Serialize};

use crate::{ChangeVolume, Thresholds};

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;

/// One of five ordered, mutually exclusive size labels.
///
/// Variants are declared in ascending order of change volume, so the derived
/// [`Ord`] matches the bucket ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    #[serde(rename = "size/xs")]
    Xs,
    #[serde(rename = "size/s")]
    S,
    #[serde(rename = "size/m")]
    M,
    #[serde(rename = "size/l")]
    L,
    #[serde(rename = "size/xl")]
    Xl,
}

impl SizeBucket {
    /// All buckets, smallest first.
    pub const ALL: [SizeBucket; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    /// Returns the label applied to the pull request, e.g. `"size/m"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Xs => "size/xs",
            Self::S => "size/s",
            Self::M => "size/m",
            Self::L => "size/l",
            Self::Xl => "size/xl",
        }
    }

    /// Returns `true` for the largest bucket.
    pub fn is_largest(self) -> bool {
        self == Self::Xl
    }
}

impl std::fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        };
        f.write_str(short)
    }
}

/// Maps a change volume to a bucket.
///
/// Each threshold is an exclusive upper bound and the rungs are tried in a
/// fixed order, first match wins:
///
/// 1. `volume < xs_max` → [`SizeBucket::Xs`]
/// 2. `volume < s_max` → [`SizeBucket::S`]
/// 3. `volume < m_max` → [`SizeBucket::M`]
/// 4. `volume < l_max` → [`SizeBucket::L`]
/// 5. otherwise → [`SizeBucket::Xl`]
///
/// A volume equal to a threshold therefore lands in the next bucket up. The
/// thresholds are not checked for ordering here; a non-ascending set still
/// yields a deterministic (if surprising) answer.
pub fn classify(thresholds: &Thresholds, volume: ChangeVolume) -> SizeBucket {
    let v = volume.as_i64();
    if v < thresholds.xs_max {
        SizeBucket::Xs
    } else if v < thresholds.s_max {
        SizeBucket::S
    } else if v < thresholds.m_max {
        SizeBucket::M
    } else if v < thresholds.l_max {
        SizeBucket::L
    } else {
        SizeBucket::Xl
    }
}
