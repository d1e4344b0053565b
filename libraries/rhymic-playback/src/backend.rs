//! Audio backend contract
//!
//! Abstracts the single native playback resource (a browser `<audio>`
//! element, a desktop decoder thread, etc.). The resource is created once
//! per process and never recreated; loading a new source reuses it.
//!
//! Commands flow down through [`AudioBackend`]; position and lifecycle
//! notifications flow back up as [`BackendEvent`] values that the engine
//! processes synchronously. Every event carries the load generation of the
//! source it refers to, so the engine can discard events from a source that
//! has since been replaced.

use crate::error::{BackendError, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Commands the engine issues to the native playback resource
///
/// `load` assigns a source and begins buffering without auto-playing.
/// `play` is best-effort: implementations report rejection (autoplay
/// policy, bad source) through the returned `Result`, and the engine
/// logs and ignores it. The property pushes are synchronous.
pub trait AudioBackend: Send {
    /// Assign a new source and begin buffering
    ///
    /// `generation` identifies this load; all events emitted for the new
    /// source must carry it. Loading while playing or paused discards the
    /// prior source and its position.
    fn load(&mut self, src: &str, generation: u64);

    /// Start or resume playback (best-effort)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to a position in seconds
    fn set_position(&mut self, seconds: f64);

    /// Push the volume (already clamped to [0, 1] by the engine)
    fn set_volume(&mut self, volume: f32);

    /// Enable or disable native single-track looping
    ///
    /// While looping is enabled the backend must not emit `Ended`.
    fn set_loop(&mut self, enabled: bool);
}

/// Notifications emitted upward by an audio backend
///
/// Each event is stamped with the generation of the `load` that produced
/// the source it describes. The engine drops events whose generation is
/// older than its latest load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendEvent {
    /// Playback position advanced
    TimeUpdate {
        /// Load generation of the emitting source
        generation: u64,
        /// Current position in seconds
        position: f64,
    },

    /// Source metadata became available
    MetadataLoaded {
        /// Load generation of the emitting source
        generation: u64,
        /// Total duration in seconds
        duration: f64,
    },

    /// Playback reached the end of the source (loop disabled only)
    Ended {
        /// Load generation of the emitting source
        generation: u64,
    },
}

impl BackendEvent {
    /// Load generation this event refers to
    pub fn generation(&self) -> u64 {
        match self {
            Self::TimeUpdate { generation, .. }
            | Self::MetadataLoaded { generation, .. }
            | Self::Ended { generation } => *generation,
        }
    }
}

/// Backend that discards every command and emits nothing
///
/// Default for a [`crate::PlaybackManager`] used as a pure state machine
/// (no audible output), e.g. queue logic in a headless context.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn load(&mut self, _src: &str, _generation: u64) {}

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_position(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn set_loop(&mut self, _enabled: bool) {}
}

/// Lifecycle state of the simulated playback resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulatedState {
    /// No source assigned
    Idle,
    /// Source assigned, metadata pending
    Loading,
    /// Metadata loaded, not yet started
    Ready,
    /// Clock advancing
    Playing,
    /// Holding position
    Paused,
    /// Reached the end with looping disabled
    Ended,
}

/// Deterministic, clock-driven audio backend
///
/// Stands in for the native playback resource in tests and headless use.
/// Time only advances through [`tick`](Self::tick), so event ordering is
/// fully deterministic: metadata is delivered on the first tick after a
/// load, `TimeUpdate` fires on every playing tick, and `Ended` fires once
/// when the clock passes the source duration (unless looping, in which
/// case the position wraps silently).
#[derive(Debug)]
pub struct SimulatedBackend {
    state: SimulatedState,
    src: Option<String>,
    generation: u64,

    position: f64,
    duration: f64,
    volume: f32,
    looping: bool,

    /// Whether play() has been requested for the current source
    play_requested: bool,

    /// When set, the next play() call fails (autoplay rejection)
    reject_next_play: bool,

    /// Duration assigned to subsequently loaded sources
    source_duration: f64,

    pending: Vec<BackendEvent>,
}

/// Default duration for simulated sources, in seconds
const DEFAULT_SOURCE_DURATION: f64 = 180.0;

impl SimulatedBackend {
    /// Create a new idle backend
    pub fn new() -> Self {
        Self {
            state: SimulatedState::Idle,
            src: None,
            generation: 0,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            looping: false,
            play_requested: false,
            reject_next_play: false,
            source_duration: DEFAULT_SOURCE_DURATION,
            pending: Vec::new(),
        }
    }

    /// Set the duration used for sources loaded after this call
    pub fn set_source_duration(&mut self, seconds: f64) {
        self.source_duration = seconds.max(0.0);
    }

    /// Make the next play() call fail, simulating an autoplay rejection
    pub fn reject_next_play(&mut self) {
        self.reject_next_play = true;
    }

    /// Advance the simulated clock by `seconds`
    ///
    /// Delivers pending metadata, emits `TimeUpdate` while playing, and
    /// handles end-of-source (wrap when looping, `Ended` otherwise).
    pub fn tick(&mut self, seconds: f64) {
        if self.state == SimulatedState::Loading {
            self.duration = self.source_duration;
            self.pending.push(BackendEvent::MetadataLoaded {
                generation: self.generation,
                duration: self.duration,
            });
            self.state = if self.play_requested {
                SimulatedState::Playing
            } else {
                SimulatedState::Ready
            };
        }

        if self.state != SimulatedState::Playing {
            return;
        }

        self.position += seconds;

        if self.position >= self.duration && self.duration > 0.0 {
            if self.looping {
                self.position %= self.duration;
            } else {
                self.position = self.duration;
                self.state = SimulatedState::Ended;
                self.pending.push(BackendEvent::TimeUpdate {
                    generation: self.generation,
                    position: self.position,
                });
                self.pending.push(BackendEvent::Ended {
                    generation: self.generation,
                });
                return;
            }
        }

        self.pending.push(BackendEvent::TimeUpdate {
            generation: self.generation,
            position: self.position,
        });
    }

    /// Drain events emitted since the last call
    pub fn take_events(&mut self) -> Vec<BackendEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Current lifecycle state
    pub fn state(&self) -> SimulatedState {
        self.state
    }

    /// Currently assigned source, if any
    pub fn current_src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Generation of the most recent load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Last pushed volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether native looping is enabled
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for SimulatedBackend {
    fn load(&mut self, src: &str, generation: u64) {
        // Loading while playing/paused goes straight back to Loading,
        // discarding the prior position
        self.src = Some(src.to_string());
        self.generation = generation;
        self.position = 0.0;
        self.duration = 0.0;
        self.play_requested = false;
        self.state = SimulatedState::Loading;
    }

    fn play(&mut self) -> Result<()> {
        if self.reject_next_play {
            self.reject_next_play = false;
            return Err(BackendError::Rejected("autoplay blocked".to_string()));
        }

        if self.src.is_none() {
            return Err(BackendError::NoSource);
        }

        self.play_requested = true;
        match self.state {
            SimulatedState::Ready | SimulatedState::Paused => {
                self.state = SimulatedState::Playing;
            }
            SimulatedState::Ended => {
                self.position = 0.0;
                self.state = SimulatedState::Playing;
            }
            // Loading starts on the metadata tick; already-playing is a no-op
            _ => {}
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.play_requested = false;
        if self.state == SimulatedState::Playing {
            self.state = SimulatedState::Paused;
        }
    }

    fn set_position(&mut self, seconds: f64) {
        if self.src.is_none() {
            return;
        }
        self.position = if self.duration > 0.0 {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
        self.pending.push(BackendEvent::TimeUpdate {
            generation: self.generation,
            position: self.position,
        });
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
    }
}

// Shared handle so tests (or platform glue) can keep driving the simulated
// clock while the engine owns the backend half.
impl AudioBackend for Arc<Mutex<SimulatedBackend>> {
    fn load(&mut self, src: &str, generation: u64) {
        if let Ok(mut backend) = self.lock() {
            backend.load(src, generation);
        }
    }

    fn play(&mut self) -> Result<()> {
        match self.lock() {
            Ok(mut backend) => backend.play(),
            Err(_) => Err(BackendError::Rejected("backend lock poisoned".to_string())),
        }
    }

    fn pause(&mut self) {
        if let Ok(mut backend) = self.lock() {
            backend.pause();
        }
    }

    fn set_position(&mut self, seconds: f64) {
        if let Ok(mut backend) = self.lock() {
            backend.set_position(seconds);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let Ok(mut backend) = self.lock() {
            backend.set_volume(volume);
        }
    }

    fn set_loop(&mut self, enabled: bool) {
        if let Ok(mut backend) = self.lock() {
            backend.set_loop(enabled);
        }
    }
}
