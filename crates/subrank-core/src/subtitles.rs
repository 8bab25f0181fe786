//! Maps provider subtitle entries to the addon's subtitle response items.

use serde::{Deserialize, Serialize};

use crate::config::AddonConfig;
use crate::matcher::NameMatcher;
use crate::request::TitleRequest;
use crate::types::SubtitleEntry;

/// Language code reported for every listed subtitle.
pub const SUBTITLE_LANG: &str = "heb";

/// Prefix of listed subtitle ids, naming the provider.
pub const PROVIDER_TAG: &str = "[WIZDOM]";

/// One subtitle as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleListing {
    pub url: String,
    pub lang: String,
    pub id: String,
}

impl SubtitleListing {
    /// Lists every entry that has a provider id.
    ///
    /// With a `filename`, entries are ordered by how closely their release
    /// name matches it, closest first; ties keep input order. Without one the
    /// input order is kept.
    #[must_use]
    pub fn from_entries(
        entries: &[SubtitleEntry],
        config: &AddonConfig,
        filename: Option<&str>,
    ) -> Vec<Self> {
        let mut ordered: Vec<&SubtitleEntry> = entries.iter().collect();
        if let Some(filename) = filename.filter(|f| !f.is_empty()) {
            let matcher = NameMatcher::new([filename]);
            ordered.sort_by_cached_key(|entry| matcher.best_score(entry.release_name()));
        }

        ordered
            .into_iter()
            .filter_map(|entry| {
                let id = entry.id.as_deref()?;
                Some(Self {
                    url: subtitle_url(config, id),
                    lang: SUBTITLE_LANG.into(),
                    id: format!("{PROVIDER_TAG}{}", entry.release_name()),
                })
            })
            .collect()
    }

    /// Lists entries for a title request, ordered by its `filename` argument
    /// when it carries one.
    #[must_use]
    pub fn for_request(
        entries: &[SubtitleEntry],
        config: &AddonConfig,
        request: &TitleRequest,
    ) -> Vec<Self> {
        Self::from_entries(entries, config, request.filename())
    }
}

/// `<hostname>[:<port>]<srt_route><id>.srt`; the port is omitted in
/// production where a reverse proxy fronts the addon.
#[must_use]
pub fn subtitle_url(config: &AddonConfig, id: &str) -> String {
    let host = config.hostname.trim_end_matches('/');
    if config.is_production {
        format!("{host}{}{id}.srt", config.srt_route)
    } else {
        format!("{host}:{}{}{id}.srt", config.port, config.srt_route)
    }
}
