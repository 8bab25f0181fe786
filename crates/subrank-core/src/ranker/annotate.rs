use super::RankedStream;
use crate::types::{AnnotatedStream, MatchScore};

/// Prefix of the label prepended to matched stream titles.
pub const MATCH_LABEL: &str = "🇮🇱 [HEB";

/// Title used when a matched stream has neither title nor name.
const FALLBACK_TITLE: &str = "Unknown";

/// Visible label for a matched stream, e.g. `🇮🇱 [HEB | score:0.123]`.
#[must_use]
pub fn match_label(score: MatchScore) -> String {
    match score.rounded() {
        Some(value) => format!("{MATCH_LABEL} | score:{value:.3}]"),
        None => format!("{MATCH_LABEL}]"),
    }
}

/// Copies the record's stream, relabelling the title when it matched.
#[must_use]
pub fn annotate(record: &RankedStream<'_>) -> AnnotatedStream {
    let mut stream = record.stream.clone();
    if record.has_match {
        let base = stream
            .title()
            .or_else(|| stream.name())
            .unwrap_or(FALLBACK_TITLE);
        let title = format!("{} {base}", match_label(record.score));
        stream.set_title(title);
    }
    AnnotatedStream::new(stream, record.score, record.has_match)
}
