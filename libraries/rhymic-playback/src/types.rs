//! Engine configuration and state snapshot types

use rhymic_core::Track;
use serde::{Deserialize, Serialize};

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume in [0, 1] (default: 1.0)
    pub volume: f32,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat flag (default: off)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
            repeat: false,
        }
    }
}

/// Immutable view of engine state handed to readers
///
/// UI surfaces render from snapshots; they never hold references into the
/// engine. `duration` of 0 means "unknown", not "empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// The track the engine considers "now playing" (independent of
    /// whether audio is actually advancing)
    pub current_track: Option<Track>,

    /// Play intent
    pub is_playing: bool,

    /// Position in seconds, >= 0
    pub position: f64,

    /// Duration in seconds, >= 0 (0 = unknown)
    pub duration: f64,

    /// Shuffle flag
    pub shuffle: bool,

    /// Repeat flag (native single-track looping)
    pub repeat: bool,

    /// Stored volume in [0, 1]
    pub volume: f32,

    /// Mute state
    pub is_muted: bool,

    /// Current queue length
    pub queue_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 1.0);
        assert!(!config.shuffle);
        assert!(!config.repeat);
    }
}
