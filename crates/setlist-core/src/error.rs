//! Error types for Setlist Core

use thiserror::Error;

/// Result type alias for setlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Setlist error types
///
/// Malformed manifest entries never show up here: the parser degrades
/// per entry and always hands back a (possibly empty) playlist.
#[derive(Error, Debug)]
pub enum Error {
    // Manifest errors
    #[error("Failed to fetch playlist: {0}")]
    ManifestFetch(String),

    #[error("Playlist from {source_name} contains no playable tracks")]
    EmptyPlaylist { source_name: String },

    #[error("Invalid playlist source: {0}")]
    InvalidSource(String),

    // Lyrics errors
    #[error("Failed to fetch lyrics: {0}")]
    LyricsFetch(String),

    #[error("Lyrics not found for {artist} - {title}")]
    LyricsNotFound { artist: String, title: String },

    // Queue errors
    #[error("Track index {index} out of range (playlist has {len} tracks)")]
    TrackIndexOutOfRange { index: usize, len: usize },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Transport errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if retrying the same call may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ManifestFetch(_) | Error::LyricsFetch(_) | Error::Network(_)
        )
    }

    /// Returns the error code for diagnostics output
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ManifestFetch(_) => "MANIFEST_FETCH",
            Error::EmptyPlaylist { .. } => "EMPTY_PLAYLIST",
            Error::InvalidSource(_) => "INVALID_SOURCE",
            Error::LyricsFetch(_) => "LYRICS_FETCH",
            Error::LyricsNotFound { .. } => "LYRICS_NOT_FOUND",
            Error::TrackIndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Network(_) => "NETWORK",
            Error::Json(_) => "JSON",
            Error::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = Error::EmptyPlaylist { source_name: "juice.m3u8".to_string() };
        assert_eq!(err.error_code(), "EMPTY_PLAYLIST");
        assert!(!err.is_recoverable());

        let err = Error::ManifestFetch("404 Not Found".to_string());
        assert_eq!(err.error_code(), "MANIFEST_FETCH");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::TrackIndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Track index 7 out of range (playlist has 3 tracks)"
        );
    }
}
