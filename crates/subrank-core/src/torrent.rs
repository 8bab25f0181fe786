//! Rewrites torrent streams so they play through a local TorrServer.

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TorrServerConfig;
use crate::error::Result;
use crate::types::Stream;

/// Filename used when a stream carries neither a filename hint nor a name.
const FALLBACK_FILENAME: &str = "video.mkv";

/// TorrServer file index used when the aggregator does not send one.
const DEFAULT_FILE_INDEX: u64 = 1;

/// Stream URL rewriter for a TorrServer backend.
///
/// Inactive (every stream passes through unchanged) when rewriting is
/// disabled or no base URL is configured.
#[derive(Debug, Clone)]
pub struct StreamRewriter {
    re_btih: Regex,
    base_url: Option<String>,
    preload: bool,
}

impl StreamRewriter {
    /// # Errors
    ///
    /// Returns `SubrankError::RegexError` if the magnet pattern fails to compile.
    pub fn new(config: &TorrServerConfig) -> Result<Self> {
        let base_url = if config.enabled {
            let base_url = config
                .base_url
                .as_deref()
                .map(|url| url.trim().trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .map(str::to_string);
            if base_url.is_none() {
                warn!("TorrServer rewriting is enabled but base_url is not configured");
            }
            base_url
        } else {
            None
        };

        Ok(Self {
            re_btih: Regex::new(r"(?i)xt=urn:btih:([a-f0-9]{40}|[a-z2-7]{32})")?,
            base_url,
            preload: config.preload,
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.base_url.is_some()
    }

    /// Lowercased info hash from a magnet link's `xt=urn:btih:` parameter.
    #[must_use]
    pub fn extract_info_hash(&self, url: &str) -> Option<String> {
        self.re_btih
            .captures(url)
            .map(|c| c[1].to_lowercase())
    }

    /// `<base>/stream/<filename>?link=<hash>&index=<idx>[&preload]&play`, or
    /// `None` when inactive. A missing or zero `file_idx` becomes index 1.
    #[must_use]
    pub fn stream_url(&self, info_hash: &str, filename: &str, file_idx: Option<u64>) -> Option<String> {
        let base_url = self.base_url.as_deref()?;
        let index = file_idx
            .filter(|&idx| idx != 0)
            .unwrap_or(DEFAULT_FILE_INDEX);
        let mut url = format!(
            "{base_url}/stream/{}?link={info_hash}&index={index}",
            urlencoding::encode(filename)
        );
        if self.preload {
            url.push_str("&preload");
        }
        url.push_str("&play");
        Some(url)
    }

    /// Returns a rewritten copy of `stream`, or an unchanged copy when it has
    /// no usable info hash or the rewriter is inactive.
    #[must_use]
    pub fn rewrite_stream(&self, stream: &Stream) -> Stream {
        let info_hash = match (stream.info_hash(), stream.url()) {
            (Some(hash), _) => Some(hash.to_lowercase()),
            (None, Some(url)) => self.extract_info_hash(url),
            (None, None) => None,
        };
        let Some(info_hash) = info_hash else {
            return stream.clone();
        };

        let filename = stream
            .filename_hint()
            .or_else(|| stream.name())
            .unwrap_or(FALLBACK_FILENAME);
        let Some(url) = self.stream_url(&info_hash, filename, stream.file_idx()) else {
            return stream.clone();
        };
        debug!(info_hash = %info_hash, filename, url = %url, "rewrote stream to TorrServer");

        let mut rewritten = stream.clone();
        rewritten.remove_info_hash();
        rewritten.set_url(url);
        rewritten.set_behavior_hint("notWebReady", Value::Bool(false));
        rewritten
    }

    /// Rewrites every stream; an inactive rewriter returns copies as-is.
    #[must_use]
    pub fn rewrite(&self, streams: &[Stream]) -> Vec<Stream> {
        if !self.is_active() {
            return streams.to_vec();
        }
        streams.iter().map(|s| self.rewrite_stream(s)).collect()
    }
}
