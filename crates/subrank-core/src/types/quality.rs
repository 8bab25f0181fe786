use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal video-quality tier parsed from a stream's free-text title.
///
/// Variants are declared lowest first so the derived `Ord` follows
/// [`QualityTier::value`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum QualityTier {
    /// No resolution marker found.
    #[default]
    Unknown,
    /// 360p
    SD360,
    /// 480p — Standard Definition
    SD480,
    /// 720p — High Definition
    HD720,
    /// 1080p — Full HD
    FHD1080,
    /// 2160p — Ultra HD / 4K
    UHD2160,
}

impl QualityTier {
    /// Vertical resolution in lines, `0` when unknown.
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::SD360 => 360,
            Self::SD480 => 480,
            Self::HD720 => 720,
            Self::FHD1080 => 1080,
            Self::UHD2160 => 2160,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::SD360 => write!(f, "360p"),
            Self::SD480 => write!(f, "480p"),
            Self::HD720 => write!(f, "720p"),
            Self::FHD1080 => write!(f, "1080p"),
            Self::UHD2160 => write!(f, "2160p"),
        }
    }
}
