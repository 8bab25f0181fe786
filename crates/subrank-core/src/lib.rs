//! # Subrank Core
//!
//! Ranks torrent stream listings by how likely each one is to have a
//! properly synced subtitle, using fuzzy matching between stream release
//! names and subtitle release names, then relabels the matching streams.
//!
//! ## Quick Start
//!
//! ```rust
//! use subrank_core::{Stream, StreamRanker, SubtitleEntry};
//!
//! let ranker = StreamRanker::new().unwrap();
//! let streams = vec![
//!     Stream::new().with_title("Other.Release.2160p [S:900 L:4]"),
//!     Stream::new().with_title("Movie.Name.1080p.WEB-DL [S:12 L:1]"),
//! ];
//! let subtitles = vec![SubtitleEntry::new("Movie.Name.1080p.WEB-DL")];
//!
//! let ranked = ranker.rank(&streams, &subtitles);
//!
//! assert!(ranked[0].has_match());
//! assert!(ranked[0].title().unwrap().starts_with("🇮🇱 [HEB | score:"));
//! assert!(!ranked[1].has_match());
//! ```
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod ranker;
pub mod request;
pub mod subtitles;
pub mod torrent;
pub mod types;

// Re-export primary API
pub use config::{AddonConfig, TorrServerConfig};
pub use error::{Result, SubrankError};
pub use matcher::{best_score, is_match, normalize, NameMatcher, MATCH_THRESHOLD};
pub use pipeline::StreamPipeline;
pub use ranker::{rank, RankedStream, SortPolicy, StreamRanker};
pub use request::{MediaType, TitleIdParser, TitleRequest};
pub use subtitles::SubtitleListing;
pub use torrent::StreamRewriter;
pub use types::{AnnotatedStream, MatchScore, QualityTier, Stream, SubtitleEntry};
