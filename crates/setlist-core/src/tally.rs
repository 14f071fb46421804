//! Play counts and the top-tracks ranking
//!
//! Counts live in memory only; storing them is left to the caller.

use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Stable key for a song, derived from its title
///
/// Lowercases the title and replaces every character outside `[a-z0-9]`
/// with `_`.
pub fn song_key(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

/// Play count record for one song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPlays {
    pub key: String,
    pub title: String,
    pub artist: String,
    pub play_count: u64,
}

/// In-memory play counter
#[derive(Debug, Clone, Default)]
pub struct PlayTally {
    plays: HashMap<String, TrackPlays>,
}

impl PlayTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one play of `track`; returns the new count
    ///
    /// Tracks with an empty title are not counted.
    pub fn record(&mut self, track: &Track) -> Option<u64> {
        if track.title.is_empty() {
            return None;
        }

        let key = song_key(&track.title);
        let entry = self.plays.entry(key.clone()).or_insert_with(|| TrackPlays {
            key,
            title: String::new(),
            artist: String::new(),
            play_count: 0,
        });
        entry.title = track.title.clone();
        entry.artist = track.artist.clone();
        entry.play_count += 1;

        debug!(key = %entry.key, count = entry.play_count, "Tracked play");
        Some(entry.play_count)
    }

    /// Plays recorded under `key`
    pub fn count(&self, key: &str) -> u64 {
        self.plays.get(key).map(|p| p.play_count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// The `limit` most played songs, highest count first
    ///
    /// Equal counts are ordered by key.
    pub fn top(&self, limit: usize) -> Vec<TrackPlays> {
        let mut ranked: Vec<_> = self.plays.values().cloned().collect();
        ranked.sort_by(|a, b| b.play_count.cmp(&a.play_count).then_with(|| a.key.cmp(&b.key)));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, artist: &str) -> Track {
        Track {
            id: Track::id_for(0),
            title: title.to_string(),
            artist: artist.to_string(),
            duration: 0.0,
            url: "x.mp3".to_string(),
        }
    }

    #[test]
    fn test_song_key() {
        assert_eq!(song_key("Lucid Dreams"), "lucid_dreams");
        assert_eq!(song_key("Come & Go"), "come___go");
        assert_eq!(song_key("Wasted (feat. Lil Uzi Vert)"), "wasted__feat__lil_uzi_vert_");
        assert_eq!(song_key("Été"), "_t_");
    }

    #[test]
    fn test_record_and_count() {
        let mut tally = PlayTally::new();
        assert_eq!(tally.record(&track("Righteous", "Juice WRLD")), Some(1));
        assert_eq!(tally.record(&track("Righteous", "Juice WRLD")), Some(2));
        assert_eq!(tally.record(&track("", "Nobody")), None);

        assert_eq!(tally.count("righteous"), 2);
        assert_eq!(tally.count("missing"), 0);
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn test_top_orders_by_count_then_key() {
        let mut tally = PlayTally::new();
        for _ in 0..3 {
            tally.record(&track("Robbery", "Juice WRLD"));
        }
        tally.record(&track("Bandit", "Juice WRLD"));
        tally.record(&track("Armed and Dangerous", "Juice WRLD"));

        let top = tally.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].key, "robbery");
        assert_eq!(top[0].play_count, 3);
        assert_eq!(top[1].key, "armed_and_dangerous");
    }
}
