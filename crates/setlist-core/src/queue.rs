//! Play queue - index bookkeeping for the playback dispatcher
//!
//! Tracks which playlist entry is current and whether it is playing.
//! Nothing here touches audio; callers hand the selected track's locator
//! to whatever player they drive.

use crate::{error::Error, types::Playlist, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Playback state as seen by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Stopped => write!(f, "stopped"),
            PlaybackState::Playing => write!(f, "playing"),
            PlaybackState::Paused => write!(f, "paused"),
        }
    }
}

/// Cursor over a playlist with wrap-around navigation
#[derive(Debug, Clone)]
pub struct PlayQueue {
    len: usize,
    current: Option<usize>,
    state: PlaybackState,
}

impl PlayQueue {
    /// Queue over `len` tracks, nothing selected
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            state: PlaybackState::Stopped,
        }
    }

    pub fn for_playlist(playlist: &Playlist) -> Self {
        Self::new(playlist.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently selected index
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Jump to `index` and start playing it
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::TrackIndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = Some(index);
        self.state = PlaybackState::Playing;
        debug!(index, "Track selected");
        Ok(index)
    }

    /// Advance, wrapping past the end to the first track
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.select(next).ok()
    }

    /// Step back, wrapping before the start to the last track
    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let prev = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => self.len - 1,
        };
        self.select(prev).ok()
    }

    /// Play/pause; with nothing selected, starts the first track
    pub fn toggle(&mut self) -> Option<usize> {
        match self.current {
            None => self.select(0).ok(),
            Some(i) => {
                self.state = match self.state {
                    PlaybackState::Playing => PlaybackState::Paused,
                    PlaybackState::Paused | PlaybackState::Stopped => PlaybackState::Playing,
                };
                Some(i)
            }
        }
    }

    /// Clear the selection
    pub fn stop(&mut self) {
        self.current = None;
        self.state = PlaybackState::Stopped;
    }
}
