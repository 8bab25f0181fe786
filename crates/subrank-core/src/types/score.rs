use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Normalized edit-distance ratio between two release names.
///
/// Lower is better and `0.0` means identical after normalization. The
/// [`MatchScore::NO_MATCH`] sentinel (positive infinity) marks a comparison
/// that could not be made at all, e.g. because one side normalized to an
/// empty string. Ordering is total so scores can be used directly as sort
/// keys.
#[derive(Debug, Clone, Copy)]
pub struct MatchScore(f64);

impl MatchScore {
    /// Sentinel for "no comparable candidate".
    pub const NO_MATCH: Self = Self(f64::INFINITY);

    /// Identical names.
    pub const EXACT: Self = Self(0.0);

    /// Wraps a raw ratio. NaN and negative values collapse to the sentinel
    /// and to `0.0` respectively so the value stays in `[0, +inf]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::NO_MATCH
        } else {
            Self(value.max(0.0))
        }
    }

    /// Builds the ratio `distance / longest` used by the name matcher.
    #[must_use]
    pub fn from_distance(distance: usize, longest: usize) -> Self {
        if longest == 0 {
            return Self::EXACT;
        }
        Self::new(distance as f64 / longest as f64)
    }

    /// The raw ratio (infinite for the sentinel).
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns `true` if the score is finite and at or under `threshold`.
    #[must_use]
    pub fn is_within(self, threshold: f64) -> bool {
        self.is_finite() && self.0 <= threshold
    }

    /// The finite value, or `None` for the sentinel.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        self.is_finite().then_some(self.0)
    }

    /// The finite value rounded to three decimals, halves away from zero.
    #[must_use]
    pub fn rounded(self) -> Option<f64> {
        self.finite().map(|value| (value * 1000.0).round() / 1000.0)
    }
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::NO_MATCH
    }
}

impl PartialEq for MatchScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MatchScore {}

impl PartialOrd for MatchScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(value) => write!(f, "{value:.3}"),
            None => write!(f, "no match"),
        }
    }
}

impl Serialize for MatchScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.finite() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_none(),
        }
    }
}
