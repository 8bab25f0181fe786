use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A subtitle release listed by the subtitle provider.
///
/// Only the release name takes part in matching. Malformed fields are read
/// as absent instead of failing the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    /// Provider-side identifier, used to build the download route.
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free-text release name, e.g. `Movie.Name.1080p.WEB-DL.HebSubs`.
    #[serde(
        default,
        rename = "versioname",
        alias = "versionName",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version_name: Option<String>,
}

impl SubtitleEntry {
    #[must_use]
    pub fn new(version_name: impl Into<String>) -> Self {
        Self {
            id: None,
            version_name: Some(version_name.into()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Release name, empty when absent.
    #[must_use]
    pub fn release_name(&self) -> &str {
        self.version_name.as_deref().unwrap_or_default()
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Ids show up as numbers or strings depending on the provider.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_provider_field_names() {
        let entry: SubtitleEntry =
            serde_json::from_value(json!({ "id": 1234, "versioname": "Movie.1080p" })).unwrap();
        assert_eq!(entry.id.as_deref(), Some("1234"));
        assert_eq!(entry.release_name(), "Movie.1080p");

        let entry: SubtitleEntry =
            serde_json::from_value(json!({ "id": "x9", "versionName": "Alt" })).unwrap();
        assert_eq!(entry.id.as_deref(), Some("x9"));
        assert_eq!(entry.release_name(), "Alt");
    }

    #[test]
    fn malformed_fields_are_absent() {
        let entry: SubtitleEntry =
            serde_json::from_value(json!({ "id": null, "versioname": ["a"], "extra": 1 }))
                .unwrap();
        assert_eq!(entry.id, None);
        assert_eq!(entry.version_name, None);
        assert_eq!(entry.release_name(), "");
    }

    #[test]
    fn builder_sets_fields() {
        let entry = SubtitleEntry::new("Release").with_id("42");
        assert_eq!(entry.id.as_deref(), Some("42"));
        assert_eq!(entry.release_name(), "Release");
    }
}
