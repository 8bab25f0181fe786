use thiserror::Error;

/// Errors that can occur outside the ranking path.
///
/// Ranking itself never fails; these cover construction of the regex-backed
/// components, configuration loading and title-id parsing.
#[derive(Debug, Error)]
pub enum SubrankError {
    /// The title id is not of the form `tt1234567[:season[:episode]]`.
    #[error("invalid title id: {input:?}")]
    InvalidTitleId {
        /// The rejected input.
        input: String,
    },

    /// The media type is neither `movie` nor `series`.
    #[error("unsupported media type: {input:?}")]
    InvalidMediaType {
        /// The rejected input.
        input: String,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for [`crate::AddonConfig`].
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for subrank operations.
pub type Result<T> = std::result::Result<T, SubrankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SubrankError::InvalidTitleId {
            input: "tt12".into(),
        };
        assert!(err.to_string().contains("tt12"));

        let err = SubrankError::InvalidConfig("srt_route is empty".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: srt_route is empty"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SubrankError>();
    }
}
