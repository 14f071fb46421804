//! Playlist parsing example
//!
//! Demonstrates parsing an EXTINF manifest, searching it and walking the
//! play queue.
//!
//! Run with: cargo run -p setlist-core --example playlist

use setlist_core::{filter, format_time, ManifestParser, PlayQueue, PlayTally};

fn main() {
    println!("Setlist Core - Playlist Example");
    println!("===============================\n");

    let manifest = r#"#EXTM3U
#EXTINF:210,Juice WRLD - Righteous
https://cdn.example.com/righteous/index.m3u8
#EXTINF:239,Juice WRLD - [Goodbye & Good Riddance] Lucid Dreams
https://cdn.example.com/lucid/index.m3u8
#EXTINF:195,Wishing Well
https://cdn.example.com/wishing/index.m3u8
#EXTINF:180,Dangling - No Locator
"#;

    let report = ManifestParser::new().parse_with_report(manifest);
    let playlist = &report.playlist;

    println!("Parsed {} tracks ({} dropped):", playlist.len(), report.dropped_entries);
    for (i, track) in playlist.iter().enumerate() {
        println!("  {}. {} [{}]", i + 1, track, format_time(track.duration));
    }
    println!();

    println!("Search for \"lucid\":");
    for entry in filter(playlist, "lucid") {
        println!("  #{} {}", entry.index + 1, entry.track.title);
    }
    println!();

    println!("Queue walk:");
    let mut queue = PlayQueue::for_playlist(playlist);
    let mut tally = PlayTally::new();
    for _ in 0..4 {
        if let Some(index) = queue.next() {
            if let Some(track) = playlist.get(index) {
                tally.record(track);
                println!("  now playing: {}", track);
            }
        }
    }
    println!();

    println!("Top tracks:");
    for (rank, plays) in tally.top(3).iter().enumerate() {
        println!("  {}. {} ({} plays)", rank + 1, plays.title, plays.play_count);
    }
}
