//! # Name Matcher
//!
//! Normalizes free-text release names and scores a target name against a set
//! of subtitle release names with a normalized Levenshtein ratio.

pub mod normalize;
pub mod score;

pub use normalize::{normalize, normalize_opt};
pub use score::{best_score, is_match, NameMatcher, MATCH_THRESHOLD};
