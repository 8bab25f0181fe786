//! Parsing of addon request paths such as `/stream/series/tt0944947:1:2/filename=x.mkv.json`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SubrankError};

/// Kind of title a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl FromStr for MediaType {
    type Err = SubrankError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            _ => Err(SubrankError::InvalidMediaType { input: s.into() }),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// A validated title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRequest {
    pub media_type: MediaType,
    /// IMDb id, e.g. `tt0944947`.
    pub imdb_id: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    /// Extra `key=value` arguments from the optional query segment.
    pub extra: BTreeMap<String, String>,
    /// The query segment as received.
    pub raw_query: Option<String>,
}

impl TitleRequest {
    /// Parses with a freshly built [`TitleIdParser`].
    ///
    /// # Errors
    ///
    /// See [`TitleIdParser::parse`].
    pub fn parse(media_type: &str, id: &str, query: Option<&str>) -> Result<Self> {
        TitleIdParser::new()?.parse(media_type, id, query)
    }

    /// The `filename` extra argument, if present.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.extra
            .get("filename")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The id segment as sent upstream: `imdb[:season[:episode]]`.
    #[must_use]
    pub fn id_segment(&self) -> String {
        let mut segment = self.imdb_id.clone();
        if let Some(season) = self.season {
            segment.push_str(&format!(":{season}"));
        }
        if let Some(episode) = self.episode {
            segment.push_str(&format!(":{episode}"));
        }
        segment
    }
}

/// Validator for `tt1234567[:season[:episode]]` ids.
#[derive(Debug, Clone)]
pub struct TitleIdParser {
    re_imdb: Regex,
}

impl TitleIdParser {
    /// # Errors
    ///
    /// Returns `SubrankError::RegexError` if the id pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_imdb: Regex::new(r"^tt[0-9]{7,9}$")?,
        })
    }

    /// Parses a media type, an id segment and an optional query segment.
    ///
    /// # Errors
    ///
    /// Returns `SubrankError::InvalidMediaType` for an unknown media type and
    /// `SubrankError::InvalidTitleId` for a malformed id, including
    /// non-numeric or zero season or episode parts.
    pub fn parse(&self, media_type: &str, id: &str, query: Option<&str>) -> Result<TitleRequest> {
        let media_type = media_type.parse::<MediaType>()?;
        let invalid = || SubrankError::InvalidTitleId { input: id.into() };

        let mut parts = id.split(':');
        let imdb_id = parts.next().unwrap_or_default();
        if !self.re_imdb.is_match(imdb_id) {
            return Err(invalid());
        }

        let mut numbers = parts.map(|part| {
            part.parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(invalid)
        });
        let season = numbers.next().transpose()?;
        let episode = numbers.next().transpose()?;
        if numbers.next().is_some() {
            return Err(invalid());
        }

        Ok(TitleRequest {
            media_type,
            imdb_id: imdb_id.to_string(),
            season,
            episode,
            extra: query.map(parse_extra_args).unwrap_or_default(),
            raw_query: query.filter(|q| !q.is_empty()).map(str::to_string),
        })
    }
}

/// Splits `key=value&key2=value2`; later keys win, bare keys map to `""`.
fn parse_extra_args(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| s.to_string())
}
