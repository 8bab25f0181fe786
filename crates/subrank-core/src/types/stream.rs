use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::score::MatchScore;

/// Key under which an annotated stream carries its best match score.
pub const SCORE_FIELD: &str = "_subtitleScore";

/// Key under which an annotated stream carries its match flag.
pub const MATCH_FLAG_FIELD: &str = "_hasSubtitleMatch";

const BEHAVIOR_HINTS: &str = "behaviorHints";

/// A stream listing as returned by the upstream aggregator.
///
/// The payload is kept as an opaque JSON object so fields this crate does not
/// know about round-trip untouched. Text accessors treat missing, empty and
/// non-string values alike as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stream {
    payload: Map<String, Value>,
}

impl Stream {
    /// Creates an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    #[must_use]
    pub fn from_payload(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Wraps a JSON value, or `None` if it is not an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(payload) => Some(Self { payload }),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_field("title", Value::String(title.into()))
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_field("name", Value::String(name.into()))
    }

    /// Sets `behaviorHints.filename`, keeping any other hints.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.set_behavior_hint("filename", Value::String(filename.into()));
        self
    }

    #[must_use]
    pub fn with_info_hash(self, info_hash: impl Into<String>) -> Self {
        self.with_field("infoHash", Value::String(info_hash.into()))
    }

    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_field("url", Value::String(url.into()))
    }

    /// Sets an arbitrary payload field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Primary display title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        text(self.payload.get("title"))
    }

    /// Secondary name (usually the source and quality column).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        text(self.payload.get("name"))
    }

    /// Structured filename hint from `behaviorHints.filename`.
    #[must_use]
    pub fn filename_hint(&self) -> Option<&str> {
        text(self.behavior_hints()?.get("filename"))
    }

    /// Torrent info hash, as sent by the aggregator.
    #[must_use]
    pub fn info_hash(&self) -> Option<&str> {
        text(self.payload.get("infoHash"))
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        text(self.payload.get("url"))
    }

    /// Index of the video file inside the torrent.
    #[must_use]
    pub fn file_idx(&self) -> Option<u64> {
        self.payload.get("fileIdx").and_then(Value::as_u64)
    }

    /// Text scanned by the quality and seeder heuristics: the title, falling
    /// back to the name.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.title().or_else(|| self.name()).unwrap_or_default()
    }

    /// Raw payload field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    #[must_use]
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.payload.insert("title".into(), Value::String(title));
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.payload.insert("url".into(), Value::String(url.clone()));
        self.payload.insert("externalUrl".into(), Value::String(url));
    }

    pub(crate) fn remove_info_hash(&mut self) {
        self.payload.remove("infoHash");
    }

    /// Sets one `behaviorHints` key, replacing a non-object hints value
    /// with a fresh object.
    pub(crate) fn set_behavior_hint(&mut self, key: &str, value: Value) {
        let hints = self
            .payload
            .entry(BEHAVIOR_HINTS)
            .or_insert_with(|| Value::Object(Map::new()));
        if !hints.is_object() {
            *hints = Value::Object(Map::new());
        }
        if let Value::Object(map) = hints {
            map.insert(key.into(), value);
        }
    }

    fn behavior_hints(&self) -> Option<&Map<String, Value>> {
        self.payload.get(BEHAVIOR_HINTS).and_then(Value::as_object)
    }
}

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// A ranked stream ready for the response formatter.
///
/// Serializes as the original payload plus [`SCORE_FIELD`] and
/// [`MATCH_FLAG_FIELD`]. A payload that already carries either key keeps its
/// own value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedStream {
    stream: Stream,
    score: MatchScore,
    has_match: bool,
}

impl AnnotatedStream {
    #[must_use]
    pub fn new(stream: Stream, score: MatchScore, has_match: bool) -> Self {
        Self {
            stream,
            score,
            has_match,
        }
    }

    /// The (possibly relabelled) stream.
    #[must_use]
    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    /// Best match score across the stream's candidate names.
    #[must_use]
    pub fn score(&self) -> MatchScore {
        self.score
    }

    #[must_use]
    pub fn has_match(&self) -> bool {
        self.has_match
    }

    /// Shortcut for the display title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.stream.title()
    }

    #[must_use]
    pub fn into_stream(self) -> Stream {
        self.stream
    }
}

impl Serialize for AnnotatedStream {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = self.stream.payload();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in payload {
            map.serialize_entry(key, value)?;
        }
        if !payload.contains_key(SCORE_FIELD) {
            map.serialize_entry(SCORE_FIELD, &self.score)?;
        }
        if !payload.contains_key(MATCH_FLAG_FIELD) {
            map.serialize_entry(MATCH_FLAG_FIELD, &self.has_match)?;
        }
        map.end()
    }
}
