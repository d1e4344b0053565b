//! Playback events
//!
//! Change notifications emitted by the engine for UI synchronization.
//! Readers drain them via [`crate::PlaybackManager::take_events`] instead
//! of holding references into engine state.

use rhymic_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The current track changed (selection, skip, or natural advance)
    TrackChanged {
        /// Id of the new current track
        track_id: TrackId,
        /// Id of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Play/pause intent flipped
    StateChanged {
        /// Whether the engine now intends to play
        is_playing: bool,
    },

    /// Playback position moved (backend time update or seek)
    PositionUpdate {
        /// Current position in seconds
        position: f64,
        /// Known duration in seconds (0 = unknown)
        duration: f64,
    },

    /// Track duration became known
    DurationChanged {
        /// Duration in seconds
        duration: f64,
    },

    /// Queue contents changed (replaced, track inserted or appended)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// Stored volume level in [0, 1]
        volume: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle or repeat flag flipped
    ModeChanged {
        /// Shuffle flag
        shuffle: bool,
        /// Repeat flag
        repeat: bool,
    },

    /// The native play() call was rejected; intent stays "playing"
    PlaybackRejected {
        /// Backend error message
        message: String,
    },
}
