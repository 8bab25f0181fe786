//! # Stream Ranker
//!
//! Scores every stream against the subtitle listing, orders the result with
//! [`SortPolicy`] and relabels the streams that have a matching subtitle.

pub mod annotate;
pub mod candidates;
pub mod policy;
pub mod signals;

pub use annotate::{annotate, match_label, MATCH_LABEL};
pub use candidates::CandidateNames;
pub use policy::{Direction, SortKey, SortPolicy};
pub use signals::{quality_tier, SignalExtractor};

use tracing::{debug, info};

use crate::error::Result;
use crate::matcher::{NameMatcher, MATCH_THRESHOLD};
use crate::types::{AnnotatedStream, MatchScore, QualityTier, Stream, SubtitleEntry};

/// A stream paired with everything the ordering policy looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStream<'a> {
    pub stream: &'a Stream,
    /// Best score across the stream's candidate names.
    pub score: MatchScore,
    pub has_match: bool,
    pub seeders: u64,
    pub quality: QualityTier,
}

impl RankedStream<'_> {
    /// Score used for ordering: the real score for matched streams, the
    /// sentinel otherwise.
    #[must_use]
    pub fn rank_score(&self) -> MatchScore {
        if self.has_match {
            self.score
        } else {
            MatchScore::NO_MATCH
        }
    }
}

/// Subtitle-aware stream ranking engine.
///
/// Holds only immutable state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct StreamRanker {
    signals: SignalExtractor,
    policy: SortPolicy,
}

impl StreamRanker {
    /// # Errors
    ///
    /// Returns `SubrankError::RegexError` if a seeder pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            signals: SignalExtractor::new()?,
            policy: SortPolicy::default(),
        })
    }

    #[must_use]
    pub fn policy(&self) -> &SortPolicy {
        &self.policy
    }

    #[must_use]
    pub fn signals(&self) -> &SignalExtractor {
        &self.signals
    }

    /// Best score of any candidate name of `stream` against the matcher.
    #[must_use]
    pub fn score_stream(&self, stream: &Stream, matcher: &NameMatcher) -> MatchScore {
        CandidateNames::from_stream(stream)
            .iter()
            .map(|name| matcher.best_score(name))
            .min()
            .unwrap_or(MatchScore::NO_MATCH)
    }

    /// Scores and orders `streams`, without relabelling them.
    ///
    /// With an empty subtitle listing no scoring happens at all and every
    /// stream is unmatched.
    #[must_use]
    pub fn rank_records<'a>(
        &self,
        streams: &'a [Stream],
        subtitles: &[SubtitleEntry],
    ) -> Vec<RankedStream<'a>> {
        let matcher = (!subtitles.is_empty()).then(|| NameMatcher::from_subtitles(subtitles));

        let mut records: Vec<RankedStream<'a>> = streams
            .iter()
            .map(|stream| {
                let score = matcher
                    .as_ref()
                    .map_or(MatchScore::NO_MATCH, |m| self.score_stream(stream, m));
                let text = stream.display_text();
                let record = RankedStream {
                    stream,
                    score,
                    has_match: score.is_within(MATCH_THRESHOLD),
                    seeders: self.signals.seeders(text),
                    quality: self.signals.quality(text),
                };
                debug!(
                    stream = text,
                    score = %record.score,
                    seeders = record.seeders,
                    quality = %record.quality,
                    matched = record.has_match,
                    "scored stream"
                );
                record
            })
            .collect();

        self.policy.sort(&mut records);
        records
    }

    /// Ranks `streams` against `subtitles` and returns annotated copies in
    /// display order.
    ///
    /// # Examples
    /// ```
    /// use subrank_core::{Stream, StreamRanker, SubtitleEntry};
    ///
    /// let ranker = StreamRanker::new().unwrap();
    /// let streams = vec![Stream::new().with_title("Movie.Name.1080p.WEB-DL.HebSubs")];
    /// let subs = vec![SubtitleEntry::new("Movie Name 1080p WEB-DL HebSubs")];
    ///
    /// let ranked = ranker.rank(&streams, &subs);
    /// assert!(ranked[0].has_match());
    /// assert!(ranked[0].title().unwrap().contains("0.000"));
    /// ```
    #[must_use]
    pub fn rank(&self, streams: &[Stream], subtitles: &[SubtitleEntry]) -> Vec<AnnotatedStream> {
        if streams.is_empty() {
            return Vec::new();
        }
        if subtitles.is_empty() {
            info!(streams = streams.len(), "no subtitles available, ranking by seeders");
        }

        let records = self.rank_records(streams, subtitles);
        let matched = records.iter().filter(|r| r.has_match).count();
        info!(
            streams = records.len(),
            subtitles = subtitles.len(),
            matched,
            "ranked streams"
        );

        records.iter().map(annotate).collect()
    }
}

/// Convenience function to rank with a freshly built [`StreamRanker`].
///
/// # Errors
///
/// Only fails if the ranker cannot be constructed.
pub fn rank(streams: &[Stream], subtitles: &[SubtitleEntry]) -> Result<Vec<AnnotatedStream>> {
    Ok(StreamRanker::new()?.rank(streams, subtitles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> StreamRanker {
        StreamRanker::new().unwrap()
    }

    fn titled(title: &str) -> Stream {
        Stream::new().with_title(title)
    }

    fn titles(ranked: &[AnnotatedStream]) -> Vec<&str> {
        ranked.iter().map(|s| s.title().unwrap_or_default()).collect()
    }

    #[test]
    fn exact_release_is_matched_and_labelled() {
        let streams = vec![titled("Movie.Name.1080p.WEB-DL.HebSubs")];
        let subs = vec![SubtitleEntry::new("Movie Name 1080p WEB-DL HebSubs")];

        let ranked = ranker().rank(&streams, &subs);

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].has_match());
        assert_eq!(ranked[0].score(), MatchScore::EXACT);
        let title = ranked[0].title().unwrap();
        assert!(title.starts_with(MATCH_LABEL));
        assert!(title.contains("0.000"));
        assert!(title.ends_with("Movie.Name.1080p.WEB-DL.HebSubs"));
    }

    #[test]
    fn different_release_is_left_untouched() {
        let streams = vec![titled("Completely.Different.Release")];
        let subs = vec![SubtitleEntry::new("Another Subtitle")];

        let ranked = ranker().rank(&streams, &subs);

        assert!(!ranked[0].has_match());
        assert!(ranked[0].score().value() > MATCH_THRESHOLD);
        assert_eq!(ranked[0].title(), Some("Completely.Different.Release"));
    }

    #[test]
    fn lower_score_ranks_first() {
        // 1 edit over 20 characters = 0.05, 4 edits over 20 = 0.20.
        let streams = vec![titled("abcdefghijklmnopwxyz"), titled("abcdefghijklmnopqrsz")];
        let subs = vec![SubtitleEntry::new("abcdefghijklmnopqrst")];

        let records = ranker().rank_records(&streams, &subs);

        assert!((records[0].score.value() - 0.05).abs() < 1e-9);
        assert!((records[1].score.value() - 0.20).abs() < 1e-9);
        assert_eq!(records[0].stream.title(), Some("abcdefghijklmnopqrsz"));
        assert!(records.iter().all(|r| r.has_match));
    }

    #[test]
    fn unmatched_streams_order_by_seeders() {
        let streams = vec![
            titled("Some.Movie [S:5 L:1]"),
            titled("Some.Movie [S:42 L:5]"),
        ];
        let subs = vec![SubtitleEntry::new("Nothing Alike At All Whatsoever")];

        let ranked = ranker().rank(&streams, &subs);

        assert!(ranked.iter().all(|s| !s.has_match()));
        assert_eq!(titles(&ranked), ["Some.Movie [S:42 L:5]", "Some.Movie [S:5 L:1]"]);
    }

    #[test]
    fn empty_subtitles_skip_scoring_and_sort_by_seeders() {
        let streams = vec![
            titled("Movie 720p 👤 3"),
            titled("Movie 1080p 👤 30"),
            titled("Movie 2160p"),
            titled("Movie 480p 👤 30"),
        ];

        let ranked = ranker().rank(&streams, &[]);

        assert!(ranked.iter().all(|s| !s.has_match()));
        assert!(ranked.iter().all(|s| s.score() == MatchScore::NO_MATCH));
        assert_eq!(
            titles(&ranked),
            ["Movie 1080p 👤 30", "Movie 480p 👤 30", "Movie 720p 👤 3", "Movie 2160p"]
        );
    }

    #[test]
    fn matched_always_precede_unmatched() {
        let streams = vec![
            titled("Popular.Other.Release.2160p [S:9000 L:1]"),
            titled("Movie.Name.480p [S:1 L:0]"),
        ];
        let subs = vec![SubtitleEntry::new("Movie.Name.480p")];

        let ranked = ranker().rank(&streams, &subs);

        assert!(ranked[0].has_match());
        assert!(!ranked[1].has_match());
        assert_eq!(ranked[1].title(), Some("Popular.Other.Release.2160p [S:9000 L:1]"));
    }

    #[test]
    fn matched_ties_break_on_seeders() {
        let streams = vec![
            Stream::new().with_title("[S:2 L:0]").with_filename("Movie.Name.mkv"),
            Stream::new().with_title("[S:20 L:0]").with_filename("Movie.Name.mkv"),
        ];
        let subs = vec![SubtitleEntry::new("Movie Name mkv")];

        let records = ranker().rank_records(&streams, &subs);

        assert_eq!(records[0].seeders, 20);
        assert_eq!(records[1].seeders, 2);
        assert_eq!(records[0].score, records[1].score);
    }

    #[test]
    fn any_candidate_name_can_match() {
        let stream = Stream::new()
            .with_title("Torrentio 👤 12")
            .with_name("[RD+] Torrentio\n1080p")
            .with_filename("Movie.Name.2020.1080p.BluRay.x264.mkv");
        let subs = vec![SubtitleEntry::new("Movie.Name.2020.1080p.BluRay.x264")];

        let ranked = ranker().rank(std::slice::from_ref(&stream), &subs);

        assert!(ranked[0].has_match());
    }

    #[test]
    fn stream_without_names_never_matches() {
        let streams = vec![Stream::new().with_field("url", serde_json::json!("magnet:?"))];
        let subs = vec![SubtitleEntry::new("anything")];

        let ranked = ranker().rank(&streams, &subs);

        assert!(!ranked[0].has_match());
        assert_eq!(ranked[0].score(), MatchScore::NO_MATCH);
        assert_eq!(ranked[0].stream(), &streams[0]);
    }

    #[test]
    fn empty_stream_list_returns_empty() {
        let subs = vec![SubtitleEntry::new("anything")];
        assert!(ranker().rank(&[], &subs).is_empty());
        assert!(ranker().rank(&[], &[]).is_empty());
    }

    #[test]
    fn true_ties_keep_input_order() {
        let streams = vec![titled("b [S:5 L:0]"), titled("a [S:5 L:0]"), titled("c [S:5 L:0]")];

        let ranked = ranker().rank(&streams, &[]);

        assert_eq!(titles(&ranked), ["b [S:5 L:0]", "a [S:5 L:0]", "c [S:5 L:0]"]);
    }

    #[test]
    fn output_preserves_payload_and_adds_diagnostics() {
        let stream = titled("Movie.Name.1080p")
            .with_field("infoHash", serde_json::json!("abc"))
            .with_field("fileIdx", serde_json::json!(3));
        let subs = vec![SubtitleEntry::new("Movie Name 1080p")];

        let ranked = rank(std::slice::from_ref(&stream), &subs).unwrap();
        let value = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(value["infoHash"], "abc");
        assert_eq!(value["fileIdx"], 3);
        assert_eq!(value["_subtitleScore"], 0.0);
        assert_eq!(value["_hasSubtitleMatch"], true);
    }
}
