//! # Subrank
//!
//! Subtitle-aware ranking of torrent stream listings.
//!
//! This crate re-exports the public API of [`subrank_core`].
//!
//! ```rust
//! use subrank::{Stream, SubtitleEntry};
//!
//! let streams = vec![Stream::new().with_title("Movie.Name.720p [S:3 L:0]")];
//! let ranked = subrank::rank(&streams, &[SubtitleEntry::new("Movie Name 720p")]).unwrap();
//! assert!(ranked[0].has_match());
//! ```

pub use subrank_core::*;
