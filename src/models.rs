//! Data models for the africatv playlist browser

use serde::{Deserialize, Serialize};

/// Grouping label used when a channel's directive line carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One playable stream entry from an M3U playlist.
///
/// `url` is required and doubles as the channel's identity for favorites.
/// Everything else is optional metadata from the `#EXTINF` directive line;
/// consumers substitute placeholders for absent fields instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Channel {
    /// Category for grouping and filtering, with the fixed placeholder for
    /// channels that carried no `group-title`.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// An ordered channel list plus the source it was loaded from.
///
/// Rebuilt from scratch on every load; channel order is source order and
/// duplicate URLs keep their distinct positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    pub channels: Vec<Channel>,
    pub source: String,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
