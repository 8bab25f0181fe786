//! Best-effort numeric signals scraped from a stream's free-text title.
//!
//! Every extractor returns a plain value with a zero/unknown default so the
//! sort comparator stays total.

use regex::Regex;

use crate::error::Result;
use crate::types::QualityTier;

/// Resolution markers in priority order; the first hit wins.
const QUALITY_MARKERS: &[(&[&str], QualityTier)] = &[
    (&["2160p", "4k"], QualityTier::UHD2160),
    (&["1080p"], QualityTier::FHD1080),
    (&["720p"], QualityTier::HD720),
    (&["480p"], QualityTier::SD480),
    (&["360p"], QualityTier::SD360),
];

/// Derives the quality tier from case-insensitive substring markers.
///
/// # Examples
/// ```
/// use subrank_core::ranker::quality_tier;
/// use subrank_core::QualityTier;
///
/// assert_eq!(quality_tier("Movie.2021.4K.HDR"), QualityTier::UHD2160);
/// assert_eq!(quality_tier("Movie.2021"), QualityTier::Unknown);
/// ```
pub fn quality_tier(text: &str) -> QualityTier {
    let lower = text.to_lowercase();
    QUALITY_MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| lower.contains(marker)))
        .map(|&(_, tier)| tier)
        .unwrap_or_default()
}

/// Seeder-count extractor with pre-compiled patterns.
///
/// Patterns are tried in order and the first one that yields a number wins:
/// `[S:42 L:5]`, `[42/5]`, `(42/5)`, `👤 42`, bare `S:42`.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    seeder_patterns: Vec<Regex>,
}

impl SignalExtractor {
    /// # Errors
    ///
    /// Returns `SubrankError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            seeder_patterns: vec![
                Regex::new(r"(?i)\[S:([0-9]+)")?,
                Regex::new(r"\[([0-9]+)/[0-9]+\]")?,
                Regex::new(r"\(([0-9]+)/[0-9]+\)")?,
                Regex::new(r"👤\s*([0-9]+)")?,
                Regex::new(r"(?i)S:([0-9]+)")?,
            ],
        })
    }

    /// Seeder count, `0` when no pattern matches. Counts too large for `u64`
    /// fall through to the next pattern.
    #[must_use]
    pub fn seeders(&self, text: &str) -> u64 {
        self.seeder_patterns
            .iter()
            .find_map(|re| re.captures(text).and_then(|c| c[1].parse().ok()))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn quality(&self, text: &str) -> QualityTier {
        quality_tier(text)
    }
}
