//! Lexicographic ordering policy for ranked streams.
//!
//! The policy is an explicit list of `(key, direction)` pairs; each key can be
//! compared on its own, and ties left after the last key keep input order
//! because sorting is stable.

use std::cmp::Ordering;

use super::RankedStream;

/// A single ranking key, compared in its natural ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Unmatched < matched.
    MatchStatus,
    /// Match score; unmatched streams all compare as the sentinel.
    Score,
    /// Parsed seeder count.
    Seeders,
    /// Parsed resolution tier.
    Quality,
}

impl SortKey {
    #[must_use]
    pub fn compare(self, a: &RankedStream<'_>, b: &RankedStream<'_>) -> Ordering {
        match self {
            Self::MatchStatus => a.has_match.cmp(&b.has_match),
            Self::Score => a.rank_score().cmp(&b.rank_score()),
            Self::Seeders => a.seeders.cmp(&b.seeders),
            Self::Quality => a.quality.cmp(&b.quality),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Ordered list of ranking keys applied lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPolicy {
    keys: Vec<(SortKey, Direction)>,
}

impl Default for SortPolicy {
    /// Matched first, then best score, then most seeders.
    fn default() -> Self {
        Self::new(vec![
            (SortKey::MatchStatus, Direction::Descending),
            (SortKey::Score, Direction::Ascending),
            (SortKey::Seeders, Direction::Descending),
        ])
    }
}

impl SortPolicy {
    #[must_use]
    pub fn new(keys: Vec<(SortKey, Direction)>) -> Self {
        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[(SortKey, Direction)] {
        &self.keys
    }

    #[must_use]
    pub fn compare(&self, a: &RankedStream<'_>, b: &RankedStream<'_>) -> Ordering {
        self.keys.iter().fold(Ordering::Equal, |acc, &(key, direction)| {
            acc.then_with(|| direction.apply(key.compare(a, b)))
        })
    }

    /// Stable sort in place.
    pub fn sort(&self, records: &mut [RankedStream<'_>]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}
