//! Player configuration

use crate::error::{Error, Result};
use crate::manifest::{ParseOptions, DEFAULT_FALLBACK_ARTIST};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Setlist configuration
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetlistConfig {
    /// Where the manifest lives (URL or path)
    pub playlist_source: String,
    /// Base URL that relative sources are resolved against
    pub base_url: Option<String>,
    /// Lyrics lookup endpoint
    pub lyrics_endpoint: String,
    /// Artist for title-only metadata
    pub fallback_artist: String,
    /// Recognize `Artist - [Album] Title`
    pub album_form: bool,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// How many entries the top-tracks view shows
    pub top_tracks_limit: usize,
}

impl Default for SetlistConfig {
    fn default() -> Self {
        Self {
            playlist_source: "juice.m3u8".to_string(),
            base_url: None,
            lyrics_endpoint: "http://localhost:3000/api/lyrics".to_string(),
            fallback_artist: DEFAULT_FALLBACK_ARTIST.to_string(),
            album_form: true,
            request_timeout_ms: 10000,
            top_tracks_limit: 5,
        }
    }
}

impl SetlistConfig {
    /// Parse a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_artist.trim().is_empty() {
            return Err(Error::InvalidConfig("fallback_artist must not be empty".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(Error::InvalidConfig("request_timeout_ms must be positive".to_string()));
        }
        if self.top_tracks_limit == 0 {
            return Err(Error::InvalidConfig("top_tracks_limit must be positive".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Scanner options derived from this config
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            fallback_artist: self.fallback_artist.clone(),
            album_form: self.album_form,
        }
    }
}
