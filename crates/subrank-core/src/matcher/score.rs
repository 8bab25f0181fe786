use strsim::levenshtein;

use super::normalize::normalize;
use crate::types::{MatchScore, SubtitleEntry};

/// Score at or under which a stream counts as having a matching subtitle.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Subtitle release names, normalized once and reused for every target.
///
/// Names that normalize to an empty string are dropped up front; they never
/// take part in a comparison.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    references: Vec<String>,
}

impl NameMatcher {
    /// Builds a matcher over raw release names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let references = names
            .into_iter()
            .map(|name| normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { references }
    }

    /// Builds a matcher over the release names of subtitle entries.
    pub fn from_subtitles(subtitles: &[SubtitleEntry]) -> Self {
        Self::new(subtitles.iter().map(SubtitleEntry::release_name))
    }

    /// Number of usable (non-empty after normalization) reference names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Lowest normalized edit-distance ratio between `target` and any
    /// reference name.
    ///
    /// Returns [`MatchScore::NO_MATCH`] when there are no usable references
    /// or when `target` normalizes to an empty string.
    #[must_use]
    pub fn best_score(&self, target: &str) -> MatchScore {
        let target = normalize(target);
        if target.is_empty() {
            return MatchScore::NO_MATCH;
        }

        self.references
            .iter()
            .map(|reference| ratio(&target, reference))
            .min()
            .unwrap_or(MatchScore::NO_MATCH)
    }

    /// Returns `true` if [`Self::best_score`] is within [`MATCH_THRESHOLD`].
    #[must_use]
    pub fn is_match(&self, target: &str) -> bool {
        self.best_score(target).is_within(MATCH_THRESHOLD)
    }
}

/// Both inputs are already normalized, hence ASCII: byte length is the
/// character count.
fn ratio(a: &str, b: &str) -> MatchScore {
    MatchScore::from_distance(levenshtein(a, b), a.len().max(b.len()))
}

/// One-shot form of [`NameMatcher::best_score`].
///
/// # Examples
/// ```
/// use subrank_core::matcher::best_score;
///
/// let score = best_score(["Movie Name 1080p WEB-DL"], "Movie.Name.1080p.WEB-DL");
/// assert_eq!(score.value(), 0.0);
/// ```
pub fn best_score<I, S>(subtitle_names: I, target: &str) -> MatchScore
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NameMatcher::new(subtitle_names).best_score(target)
}

/// One-shot form of [`NameMatcher::is_match`].
pub fn is_match<I, S>(subtitle_names: I, target: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NameMatcher::new(subtitle_names).is_match(target)
}
