pub mod quality;
pub mod score;
pub mod stream;
pub mod subtitle;

pub use quality::QualityTier;
pub use score::MatchScore;
pub use stream::{AnnotatedStream, Stream, MATCH_FLAG_FIELD, SCORE_FIELD};
pub use subtitle::SubtitleEntry;
