//! Addon configuration, loaded from TOML.
//!
//! ```toml
//! hostname = "https://192.168.1.89"
//! port = 7000
//! is_production = false
//! srt_route = "/srt/"
//!
//! [torrserver]
//! enabled = true
//! base_url = "http://127.0.0.1:8090"
//! preload = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubrankError};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonConfig {
    /// Public hostname including scheme, used to build subtitle URLs.
    pub hostname: String,
    /// Listening port; appended to subtitle URLs outside production.
    pub port: u16,
    pub is_production: bool,
    /// Route prefix under which subtitle files are served.
    pub srt_route: String,
    pub torrserver: TorrServerConfig,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            hostname: "http://127.0.0.1".into(),
            port: 7000,
            is_production: false,
            srt_route: "/srt/".into(),
            torrserver: TorrServerConfig::default(),
        }
    }
}

/// Rewriting of torrent streams to a local TorrServer instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrServerConfig {
    pub enabled: bool,
    /// e.g. `http://127.0.0.1:8090`, without a trailing slash.
    pub base_url: Option<String>,
    /// Ask TorrServer to preload the torrent before playback.
    pub preload: bool,
}

impl AddonConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `SubrankError::ConfigParse` for malformed TOML and
    /// `SubrankError::InvalidConfig` for unusable values.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `SubrankError::ConfigRead` if the file cannot be read, plus
    /// the errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// # Errors
    ///
    /// Returns `SubrankError::InvalidConfig` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.srt_route.trim().is_empty() {
            return Err(SubrankError::InvalidConfig("srt_route is empty".into()));
        }
        if self
            .torrserver
            .base_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(SubrankError::InvalidConfig(
                "torrserver.base_url is blank".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AddonConfig::from_toml_str("").unwrap();
        assert_eq!(config, AddonConfig::default());
        assert!(!config.torrserver.enabled);
        assert_eq!(config.torrserver.base_url, None);
    }

    #[test]
    fn parses_full_document() {
        let config = AddonConfig::from_toml_str(
            r#"
            hostname = "https://10.0.0.2"
            port = 443
            is_production = true
            srt_route = "/subs/"

            [torrserver]
            enabled = true
            base_url = "http://127.0.0.1:8090"
            preload = true
            "#,
        )
        .unwrap();

        assert_eq!(config.hostname, "https://10.0.0.2");
        assert_eq!(config.port, 443);
        assert!(config.is_production);
        assert_eq!(config.srt_route, "/subs/");
        assert!(config.torrserver.enabled);
        assert_eq!(
            config.torrserver.base_url.as_deref(),
            Some("http://127.0.0.1:8090")
        );
        assert!(config.torrserver.preload);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AddonConfig::from_toml_str("port = \"many\"").unwrap_err();
        assert!(matches!(err, SubrankError::ConfigParse(_)));
    }

    #[test]
    fn blank_values_are_rejected() {
        let err = AddonConfig::from_toml_str("srt_route = \"  \"").unwrap_err();
        assert!(matches!(err, SubrankError::InvalidConfig(_)));

        let err = AddonConfig::from_toml_str("[torrserver]\nbase_url = \"\"").unwrap_err();
        assert!(matches!(err, SubrankError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AddonConfig::load("/definitely/not/here/config.toml").unwrap_err();
        assert!(matches!(err, SubrankError::ConfigRead(_)));
    }
}
