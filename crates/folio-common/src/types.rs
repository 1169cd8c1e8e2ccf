//! Core type definitions shared by the media core and the API client.
//!
//! All enums serialize in lowercase, matching the strings the portfolio
//! backend sends and expects in form fields and JSON bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a media record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video file or a hosted video link.
    Video,
}

impl MediaKind {
    /// The backend's name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" | "img" => Ok(Self::Image),
            "video" | "vid" => Ok(Self::Video),
            other => Err(format!("unknown media kind: {other}")),
        }
    }
}

/// Social network a profile link can be stored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// LinkedIn profile.
    Linkedin,
    /// ArtStation portfolio.
    Artstation,
}

impl SocialPlatform {
    /// Every platform the backend knows, in display order.
    pub const ALL: [SocialPlatform; 2] = [Self::Linkedin, Self::Artstation];

    /// The backend's name for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Artstation => "artstation",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linkedin" => Ok(Self::Linkedin),
            "artstation" => Ok(Self::Artstation),
            other => Err(format!("unknown social platform: {other}")),
        }
    }
}

/// Direction of a one-step move in an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the list (lower position).
    Up,
    /// Towards the end of the list (higher position).
    Down,
}

impl Direction {
    /// Signed step: -1 for up, +1 for down.
    pub fn step(&self) -> i64 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}
