//! EXTINF playlist scanner
//!
//! Handles header-less manifests made of pairs:
//!
//! ```text
//! #EXTINF:<seconds>,<artist> - <title>
//! <locator>
//! ```
//!
//! Each step (duration, metadata, artist/title split, locator) is exposed
//! on its own so it can be checked in isolation. None of them fail: a
//! malformed entry gets default fields or is dropped.

use super::{ParseOptions, ParseReport};
use crate::types::{UNKNOWN_ARTIST, UNKNOWN_TITLE};
use nom::{
    bytes::complete::{tag, take_until, take_while},
    character::complete::char,
    combinator::rest,
    sequence::{delimited, preceded},
    IResult, Parser,
};
use tracing::{debug, trace};

/// Tag opening every info line
pub const INFO_TAG: &str = "#EXTINF:";

/// Separator between artist and title
pub const SEPARATOR: &str = " - ";

/// Artist and title recovered from an info line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMeta {
    pub artist: String,
    pub title: String,
}

impl TrackMeta {
    fn unknown() -> Self {
        Self {
            artist: UNKNOWN_ARTIST.to_string(),
            title: UNKNOWN_TITLE.to_string(),
        }
    }
}

/// Scan manifest text into tracks plus entry statistics
pub fn scan(text: &str, options: &ParseOptions) -> ParseReport {
    let mut report = ParseReport::default();

    let text = text.trim();
    if text.is_empty() {
        return report;
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !line.starts_with(INFO_TAG) {
            i += 1;
            continue;
        }

        report.info_lines += 1;

        let Some(url) = locator(lines.get(i + 1).copied()) else {
            debug!(line = i + 1, "Info line without locator, skipping");
            report.dropped_entries += 1;
            i += 1;
            continue;
        };

        let duration = extract_duration(line);
        let meta = match extract_metadata(line) {
            Some(metadata) => split_metadata(metadata, options),
            None => {
                report.defaulted_entries += 1;
                TrackMeta::unknown()
            }
        };

        trace!(
            title = %meta.title,
            artist = %meta.artist,
            duration,
            "Parsed entry"
        );
        report
            .playlist
            .push(meta.title, meta.artist, duration, url.to_string());

        // Consumed the info line and its locator
        i += 2;
    }

    report
}

fn duration_run(input: &str) -> IResult<&str, &str> {
    preceded(
        tag(INFO_TAG),
        take_while(|c: char| c.is_ascii_digit() || c == '.'),
    )
    .parse(input)
}

/// Duration in seconds following the info tag, `0.0` when absent
///
/// Only digits and dots are considered, and the value stops at a second
/// dot, so `#EXTINF:1.2.3,` reads as `1.2`.
pub fn extract_duration(info_line: &str) -> f64 {
    let Ok((_, run)) = duration_run(info_line) else {
        return 0.0;
    };

    let end = run
        .match_indices('.')
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(run.len());

    run[..end]
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .unwrap_or(0.0)
}

/// Text after the first comma of an info line
///
/// Returns `None` when there is no comma or nothing but whitespace after it.
pub fn extract_metadata(info_line: &str) -> Option<&str> {
    let (_, metadata) = info_line.split_once(',')?;
    if metadata.trim().is_empty() {
        None
    } else {
        Some(metadata)
    }
}

fn album_form(input: &str) -> IResult<&str, (&str, &str, &str, &str)> {
    (
        take_until(SEPARATOR),
        tag(SEPARATOR),
        delimited(char('['), take_until("]"), char(']')),
        rest,
    )
        .parse(input)
}

/// Split metadata into artist and title
///
/// With album form enabled, `Artist - [Album] Title` is tried first and the
/// album is dropped. Otherwise the text is split on `" - "`: the first
/// segment is the artist, the second the title. A lone segment becomes the
/// title and the artist falls back to `options.fallback_artist`.
pub fn split_metadata(metadata: &str, options: &ParseOptions) -> TrackMeta {
    if options.album_form {
        if let Ok((_, (artist, _, _album, title))) = album_form(metadata) {
            let (artist, title) = (artist.trim(), title.trim());
            if !artist.is_empty() && !title.is_empty() {
                return TrackMeta {
                    artist: artist.to_string(),
                    title: title.to_string(),
                };
            }
        }
    }

    let mut segments = metadata.split(SEPARATOR);
    let first = segments.next().unwrap_or_default().trim();
    let second = segments.next().map(str::trim).filter(|s| !s.is_empty());

    match second {
        Some(title) => TrackMeta {
            artist: non_empty_or(first, UNKNOWN_ARTIST),
            title: title.to_string(),
        },
        None => TrackMeta {
            artist: options.fallback_artist.clone(),
            title: non_empty_or(first, UNKNOWN_TITLE),
        },
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Locator carried by the line after an info line
///
/// Missing, blank and comment lines do not count as locators.
pub fn locator(line: Option<&str>) -> Option<&str> {
    let line = line?.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn test_extract_duration() {
        assert_eq!(extract_duration("#EXTINF:210,Juice WRLD - Righteous"), 210.0);
        assert_eq!(extract_duration("#EXTINF:183.25,A - B"), 183.25);
        assert_eq!(extract_duration("#EXTINF:1.2.3,A - B"), 1.2);
        assert_eq!(extract_duration("#EXTINF:5.,A"), 5.0);
    }

    #[test]
    fn test_extract_duration_defaults_to_zero() {
        assert_eq!(extract_duration("#EXTINF:,A - B"), 0.0);
        assert_eq!(extract_duration("#EXTINF:-1,A - B"), 0.0);
        assert_eq!(extract_duration("#EXTINF:.,A - B"), 0.0);
        assert_eq!(extract_duration("not an info line"), 0.0);
    }

    #[test]
    fn test_extract_metadata() {
        assert_eq!(extract_metadata("#EXTINF:10,A - B"), Some("A - B"));
        assert_eq!(extract_metadata("#EXTINF:10,A, B - C"), Some("A, B - C"));
        assert_eq!(extract_metadata("#EXTINF:10"), None);
        assert_eq!(extract_metadata("#EXTINF:10,"), None);
        assert_eq!(extract_metadata("#EXTINF:10,   "), None);
    }

    #[test]
    fn test_split_artist_title() {
        let meta = split_metadata("Artist - Title", &opts());
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "Title");
    }

    #[test]
    fn test_split_extra_segments_ignored() {
        let meta = split_metadata("A - B - C", &opts());
        assert_eq!(meta.artist, "A");
        assert_eq!(meta.title, "B");
    }

    #[test]
    fn test_split_single_segment_uses_fallback_artist() {
        let meta = split_metadata("Solo", &opts());
        assert_eq!(meta.title, "Solo");
        assert_eq!(meta.artist, "Juice WRLD");

        let custom = ParseOptions {
            fallback_artist: "Various Artists".to_string(),
            ..ParseOptions::default()
        };
        assert_eq!(split_metadata("Solo", &custom).artist, "Various Artists");
    }

    #[test]
    fn test_split_trailing_separator_is_single_segment() {
        let meta = split_metadata("Artist - ", &opts());
        assert_eq!(meta.title, "Artist");
        assert_eq!(meta.artist, "Juice WRLD");
    }

    #[test]
    fn test_split_album_form() {
        let meta = split_metadata("Artist - [Album] Title", &opts());
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "Title");
    }

    #[test]
    fn test_split_album_form_disabled() {
        let options = ParseOptions {
            album_form: false,
            ..ParseOptions::default()
        };
        let meta = split_metadata("Artist - [Album] Title", &options);
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "[Album] Title");
    }

    #[test]
    fn test_split_album_without_title_falls_back_to_plain_split() {
        let meta = split_metadata("Artist - [Album]", &opts());
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "[Album]");
    }

    #[test]
    fn test_locator() {
        assert_eq!(locator(Some("  https://cdn/a.m3u8  ")), Some("https://cdn/a.m3u8"));
        assert_eq!(locator(Some("#EXTINF:1,A")), None);
        assert_eq!(locator(Some("#EXTM3U")), None);
        assert_eq!(locator(Some("   ")), None);
        assert_eq!(locator(None), None);
    }

    #[test]
    fn test_scan_counts_dropped_and_defaulted() {
        let text = "#EXTINF:1,A - B\n#EXTINF:2\nsecond.mp3\n#EXTINF:3,C - D";
        let report = scan(text, &opts());

        assert_eq!(report.info_lines, 3);
        assert_eq!(report.dropped_entries, 2);
        assert_eq!(report.defaulted_entries, 1);
        assert_eq!(report.playlist.len(), 1);

        let track = report.playlist.get(0).unwrap();
        assert_eq!(track.title, "Unknown Title");
        assert_eq!(track.artist, "Unknown Artist");
        assert_eq!(track.duration, 2.0);
        assert_eq!(track.url, "second.mp3");
    }

    #[test]
    fn test_scan_handles_crlf() {
        let text = "#EXTINF:10,A - B\r\nhttps://cdn/b.mp3\r\n";
        let report = scan(text, &opts());
        let track = report.playlist.get(0).unwrap();
        assert_eq!(track.title, "B");
        assert_eq!(track.url, "https://cdn/b.mp3");
    }
}
