//! Manifest parsing for EXTINF playlists

pub mod extinf;

pub use extinf::{extract_duration, extract_metadata, locator, split_metadata, TrackMeta, INFO_TAG};

use crate::types::Playlist;
use tracing::debug;

/// Artist assigned when the metadata carries only a title
pub const DEFAULT_FALLBACK_ARTIST: &str = "Juice WRLD";

/// Knobs for the EXTINF scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Artist used for single-segment metadata
    pub fallback_artist: String,
    /// Recognize `Artist - [Album] Title` before the plain split
    pub album_form: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            fallback_artist: DEFAULT_FALLBACK_ARTIST.to_string(),
            album_form: true,
        }
    }
}

/// Playlist plus per-entry statistics from one scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub playlist: Playlist,
    /// Info lines encountered
    pub info_lines: usize,
    /// Info lines dropped for lack of a locator
    pub dropped_entries: usize,
    /// Tracks emitted with default title and artist
    pub defaulted_entries: usize,
}

/// Stateless EXTINF manifest parser
///
/// Parsing is a pure transform: the same text always yields an equal
/// playlist and nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct ManifestParser {
    options: ParseOptions,
}

impl ManifestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse manifest text into a playlist (possibly empty)
    pub fn parse(&self, text: &str) -> Playlist {
        self.parse_with_report(text).playlist
    }

    /// Parse and keep the scan statistics
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let report = extinf::scan(text, &self.options);
        debug!(
            tracks = report.playlist.len(),
            dropped = report.dropped_entries,
            "Manifest scanned"
        );
        report
    }
}

/// Parse manifest text with the given options
pub fn parse_manifest(text: &str, options: &ParseOptions) -> Playlist {
    extinf::scan(text, options).playlist
}

/// Quick check whether text looks like an EXTINF manifest
pub fn looks_like_manifest(content: &str) -> bool {
    content.lines().any(|l| l.starts_with(INFO_TAG))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
#EXTINF:210,Juice WRLD - Righteous
https://cdn.example.com/righteous.m3u8
#EXTINF:239.5,Juice WRLD - [Goodbye & Good Riddance] Lucid Dreams
https://cdn.example.com/lucid.m3u8
#EXTINF:180,Wishing Well
https://cdn.example.com/wishing.m3u8
";

    #[test]
    fn test_parse_sample() {
        let playlist = ManifestParser::new().parse(SAMPLE);
        assert_eq!(playlist.len(), 3);

        let lucid = playlist.get(1).unwrap();
        assert_eq!(lucid.id, "song_1");
        assert_eq!(lucid.artist, "Juice WRLD");
        assert_eq!(lucid.title, "Lucid Dreams");
        assert_eq!(lucid.duration, 239.5);

        let wishing = playlist.get(2).unwrap();
        assert_eq!(wishing.title, "Wishing Well");
        assert_eq!(wishing.artist, DEFAULT_FALLBACK_ARTIST);
    }

    #[test]
    fn test_parse_empty() {
        let parser = ManifestParser::new();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("   \n\n  ").is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = ManifestParser::new();
        assert_eq!(parser.parse(SAMPLE), parser.parse(SAMPLE));
        assert_eq!(parser.parse(SAMPLE), parse_manifest(SAMPLE, &ParseOptions::default()));
    }

    #[test]
    fn test_looks_like_manifest() {
        assert!(looks_like_manifest(SAMPLE));
        assert!(!looks_like_manifest("<html></html>"));
    }
}
