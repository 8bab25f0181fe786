use crate::config::AddonConfig;
use crate::error::Result;
use crate::ranker::StreamRanker;
use crate::torrent::StreamRewriter;
use crate::types::{AnnotatedStream, Stream, SubtitleEntry};

/// The stream response path: URL rewriting followed by ranking.
#[derive(Debug, Clone)]
pub struct StreamPipeline {
    rewriter: StreamRewriter,
    ranker: StreamRanker,
}

impl StreamPipeline {
    /// # Errors
    ///
    /// Returns `SubrankError::RegexError` if a built-in pattern fails to compile.
    pub fn new(config: &AddonConfig) -> Result<Self> {
        Ok(Self {
            rewriter: StreamRewriter::new(&config.torrserver)?,
            ranker: StreamRanker::new()?,
        })
    }

    #[must_use]
    pub fn ranker(&self) -> &StreamRanker {
        &self.ranker
    }

    #[must_use]
    pub fn rewriter(&self) -> &StreamRewriter {
        &self.rewriter
    }

    /// Rewrites then ranks `streams` against `subtitles`.
    #[must_use]
    pub fn run(&self, streams: &[Stream], subtitles: &[SubtitleEntry]) -> Vec<AnnotatedStream> {
        if streams.is_empty() {
            return Vec::new();
        }
        let rewritten = self.rewriter.rewrite(streams);
        self.ranker.rank(&rewritten, subtitles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TorrServerConfig;

    const HASH: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn rewrites_and_ranks() {
        let config = AddonConfig {
            torrserver: TorrServerConfig {
                enabled: true,
                base_url: Some("http://ts:8090".into()),
                preload: false,
            },
            ..AddonConfig::default()
        };
        let pipeline = StreamPipeline::new(&config).unwrap();
        let streams = vec![
            Stream::new().with_title("Other.Release [S:50 L:1]").with_info_hash(HASH),
            Stream::new().with_title("Movie.Name.1080p [S:1 L:1]").with_info_hash(HASH),
        ];
        let subs = vec![SubtitleEntry::new("Movie.Name.1080p")];

        let out = pipeline.run(&streams, &subs);

        assert_eq!(out.len(), 2);
        assert!(out[0].has_match());
        assert!(out[0].title().unwrap().ends_with("Movie.Name.1080p [S:1 L:1]"));
        assert!(out.iter().all(|s| s.stream().url().unwrap().starts_with("http://ts:8090/stream/")));
        assert!(out.iter().all(|s| s.stream().info_hash().is_none()));
    }

    #[test]
    fn empty_streams_short_circuit() {
        let pipeline = StreamPipeline::new(&AddonConfig::default()).unwrap();
        assert!(pipeline.run(&[], &[SubtitleEntry::new("x")]).is_empty());
    }

    #[test]
    fn default_config_only_ranks() {
        let pipeline = StreamPipeline::new(&AddonConfig::default()).unwrap();
        let streams = vec![Stream::new().with_title("A [S:1 L:0]").with_info_hash(HASH)];

        let out = pipeline.run(&streams, &[]);

        assert_eq!(out[0].stream().info_hash(), Some(HASH));
        assert!(!out[0].has_match());
    }
}
