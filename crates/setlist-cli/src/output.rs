//! Output formatting for CLI

use serde::Serialize;
use setlist_core::{format_time, CatalogEntry, TrackPlays};
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Tabled)]
struct TrackRow<'a> {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Title")]
    title: &'a str,
    #[tabled(rename = "Artist")]
    artist: &'a str,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "URL")]
    url: &'a str,
}

/// Render catalog entries; numbers are 1-based playlist positions
pub fn render_tracks(entries: &[CatalogEntry<'_>], format: OutputFormat) -> String {
    let rows: Vec<TrackRow<'_>> = entries
        .iter()
        .map(|e| TrackRow {
            number: e.index + 1,
            title: &e.track.title,
            artist: &e.track.artist,
            time: format_time(e.track.duration),
            url: &e.track.url,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let tracks: Vec<_> = entries.iter().map(|e| e.track).collect();
            to_json(&tracks)
        }
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        OutputFormat::Text => rows
            .iter()
            .map(|r| format!("{:>3}. {} - {} [{}]", r.number, r.artist, r.title, r.time))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[derive(Tabled)]
struct PlaysRow<'a> {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Title")]
    title: &'a str,
    #[tabled(rename = "Artist")]
    artist: &'a str,
    #[tabled(rename = "Plays")]
    plays: u64,
}

/// Render a top-tracks ranking
pub fn render_top(top: &[TrackPlays], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&top),
        OutputFormat::Table => {
            let rows: Vec<_> = top
                .iter()
                .enumerate()
                .map(|(i, p)| PlaysRow {
                    rank: i + 1,
                    title: &p.title,
                    artist: &p.artist,
                    plays: p.play_count,
                })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Text => top
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {} - {} ({} plays)", i + 1, p.artist, p.title, p.play_count))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::{filter, ManifestParser};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Text);
    }

    #[test]
    fn test_render_tracks_text_uses_playlist_numbers() {
        let playlist = ManifestParser::new().parse(
            "#EXTINF:210,Juice WRLD - Righteous\nr.m3u8\n#EXTINF:239,Juice WRLD - Lucid Dreams\nl.m3u8",
        );
        let out = render_tracks(&filter(&playlist, "lucid"), OutputFormat::Text);
        assert_eq!(out, "  2. Juice WRLD - Lucid Dreams [3:59]");
    }

    #[test]
    fn test_render_tracks_json_is_record_shape() {
        let playlist = ManifestParser::new().parse("#EXTINF:10,A - B\nb.mp3");
        let out = render_tracks(&filter(&playlist, ""), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], "song_0");
        assert_eq!(value[0]["url"], "b.mp3");
    }
}
