//! Catalog helpers over a parsed playlist: search, time labels, file names

use crate::types::{Playlist, Track};

/// A track matched by a search, with its position in the full playlist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry<'a> {
    /// Index into the unfiltered playlist (play order)
    pub index: usize,
    pub track: &'a Track,
}

/// Tracks whose title or artist contains `query`, ignoring case
///
/// Results keep playlist order. An empty query matches everything.
pub fn filter<'a>(playlist: &'a Playlist, query: &str) -> Vec<CatalogEntry<'a>> {
    let needle = query.to_lowercase();
    playlist
        .iter()
        .enumerate()
        .filter(|(_, track)| {
            track.title.to_lowercase().contains(&needle)
                || track.artist.to_lowercase().contains(&needle)
        })
        .map(|(index, track)| CatalogEntry { index, track })
        .collect()
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// File name offered when saving a track
pub fn download_file_name(track: &Track) -> String {
    format!("{} - {}.mp3", track.artist, track.title)
}
