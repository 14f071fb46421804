//! Setlist Core - Playlist Library for Setlist
//!
//! This crate provides the data side of a streaming music player:
//! - EXTINF manifest parsing into an immutable playlist
//! - Manifest loading from HTTP, disk or memory
//! - Catalog search and display helpers
//! - Play queue navigation (next/prev with wrap-around)
//! - Play counts and top-tracks ranking
//! - Lyrics lookup through an HTTP endpoint
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Setlist Core                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │   Manifest   │  │   Playlist   │  │   Manifest   │           │
//! │  │    Source    │──│    Loader    │──│    Parser    │           │
//! │  └──────────────┘  └──────┬───────┘  └──────────────┘           │
//! │                           │                                     │
//! │                    ┌──────┴──────┐                              │
//! │                    │  Playlist   │                              │
//! │                    └──────┬──────┘                              │
//! │                           │                                     │
//! │  ┌──────────────┐  ┌──────┴──────┐  ┌──────────────┐            │
//! │  │   Catalog    │  │    Play     │  │    Lyrics    │            │
//! │  │   Search     │  │    Queue    │  │    Client    │            │
//! │  └──────────────┘  └──────┬──────┘  └──────────────┘            │
//! │                    ┌──────┴──────┐                              │
//! │                    │ Play Tally  │                              │
//! │                    └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use setlist_core::ManifestParser;
//!
//! let text = "#EXTINF:210,Juice WRLD - Righteous\nhttps://cdn.example.com/righteous.m3u8";
//! let playlist = ManifestParser::new().parse(text);
//!
//! assert_eq!(playlist.len(), 1);
//! assert_eq!(playlist.get(0).unwrap().title, "Righteous");
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod manifest;
pub mod loader;
pub mod catalog;
pub mod queue;
pub mod tally;
pub mod lyrics;

pub use error::{Error, Result};
pub use types::*;
pub use config::SetlistConfig;
pub use manifest::{parse_manifest, ManifestParser, ParseOptions, ParseReport};
pub use loader::{source_for, FileSource, HttpSource, LoadedPlaylist, ManifestSource, PlaylistLoader, StaticSource};
pub use catalog::{download_file_name, filter, format_time, CatalogEntry};
pub use queue::{PlayQueue, PlaybackState};
pub use tally::{song_key, PlayTally, TrackPlays};
pub use lyrics::LyricsClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    tracing::info!(version = VERSION, "Setlist Core initialized");
}
