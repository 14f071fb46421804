//! Core types for Setlist

use serde::{Deserialize, Serialize};

/// Title used when an info line carries no usable metadata
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist used when an info line carries no usable metadata
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One playable entry of a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// `song_<n>`, dense and zero-based in parse order
    pub id: String,
    /// Display title
    pub title: String,
    /// Display artist
    pub artist: String,
    /// Duration in seconds (0 when unknown)
    pub duration: f64,
    /// Stream locator, copied from the manifest (trimmed, never empty)
    pub url: String,
}

impl Track {
    /// Builds the identifier for the track emitted at `index`
    pub fn id_for(index: usize) -> String {
        format!("song_{}", index)
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Ordered, immutable sequence of tracks produced by one parse
///
/// A new parse always yields a new `Playlist`; there is no way to add or
/// remove tracks after construction, so ids stay dense.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index` in manifest order
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Position of the track with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Sum of all known durations, in seconds
    pub fn total_duration(&self) -> f64 {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    /// Appends a track, assigning the next dense id
    pub(crate) fn push(&mut self, title: String, artist: String, duration: f64, url: String) {
        let id = Track::id_for(self.tracks.len());
        self.tracks.push(Track {
            id,
            title,
            artist,
            duration,
            url,
        });
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
