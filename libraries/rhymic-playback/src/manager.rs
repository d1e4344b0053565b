//! Playback manager - core orchestration
//!
//! Owns current-track identity, play/pause intent, the active queue, and
//! the shuffle/repeat flags, and is the single owner of the audio backend.
//! Every operation is total: backend failures are logged and swallowed so
//! a playback hiccup never interrupts browsing.

use crate::{
    backend::{AudioBackend, BackendEvent, NullBackend},
    events::PlaybackEvent,
    queue::Queue,
    shuffle::pick_shuffled_index,
    types::{PlaybackConfig, PlaybackSnapshot},
    volume::Volume,
};
use rand::thread_rng;
use rhymic_core::{Track, TrackId};
use tracing::{debug, warn};

/// Direction of a skip operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipDirection {
    Forward,
    Backward,
}

/// Central playback engine
///
/// Synchronous and single-threaded: user operations and backend events are
/// applied in call order. Readers take [`PlaybackSnapshot`]s or drain
/// [`PlaybackEvent`]s; nothing outside the engine mutates the backend.
pub struct PlaybackManager {
    // State
    current: Option<Track>,
    playing: bool,
    position: f64,
    duration: f64,

    // Queue
    queue: Queue,

    // Settings
    shuffle: bool,
    repeat: bool,
    volume: Volume,

    // Backend
    backend: Box<dyn AudioBackend>,

    /// Incremented on every load; events from older loads are stale
    load_generation: u64,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create a new engine driving the given backend
    pub fn new(config: PlaybackConfig, backend: Box<dyn AudioBackend>) -> Self {
        Self {
            current: None,
            playing: false,
            position: 0.0,
            duration: 0.0,
            queue: Queue::new(),
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume: Volume::new(config.volume),
            backend,
            load_generation: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Seeding =====

    /// Replace the queue with `tracks`, verbatim
    ///
    /// Does not touch the current track or play intent. This is the only
    /// way collections enter the queue: every UI surface replaces the
    /// queue with its own song list before selecting a track from it.
    pub fn replace_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Seed the queue from a collection and start one of its tracks
    ///
    /// Equivalent to `replace_queue(tracks)` followed by
    /// `select_track(start)`.
    pub fn play_collection(&mut self, tracks: Vec<Track>, start: Track) {
        self.replace_queue(tracks);
        self.select_track(start);
    }

    /// Insert `track` to play right after the current one
    pub fn play_next(&mut self, track: Track) {
        self.queue.insert_after(self.current_id(), track);
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Append `track` to the end of the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push_end(track);
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    // ===== Playback Control =====

    /// Make `track` the current track and start playing it from the top
    ///
    /// The track does not have to be in the queue; next/previous then fall
    /// back to the documented index-not-found behavior.
    pub fn select_track(&mut self, track: Track) {
        let previous_track_id = self.current_id();

        self.position = 0.0;
        self.duration = 0.0;
        self.playing = true;
        self.current = Some(track);

        self.load_current();

        self.emit(PlaybackEvent::TrackChanged {
            // current was just assigned above
            track_id: self.current_id().unwrap_or_default(),
            previous_track_id,
        });
        self.emit(PlaybackEvent::StateChanged { is_playing: true });
    }

    /// Flip play/pause intent
    ///
    /// No-op when nothing is selected: without a current track the engine
    /// must stay "not playing".
    pub fn toggle_play(&mut self) {
        if self.current.is_none() {
            return;
        }

        self.playing = !self.playing;
        if self.playing {
            self.try_play();
        } else {
            self.backend.pause();
        }
        self.emit(PlaybackEvent::StateChanged {
            is_playing: self.playing,
        });
    }

    /// Seek to `seconds`, clamped into [0, duration]
    ///
    /// While the duration is still unknown only the lower bound applies.
    pub fn seek(&mut self, seconds: f64) {
        if self.current.is_none() {
            return;
        }

        self.position = if self.duration > 0.0 {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
        self.backend.set_position(self.position);
        self.emit(PlaybackEvent::PositionUpdate {
            position: self.position,
            duration: self.duration,
        });
    }

    /// Skip to the next track per the ordering policy
    ///
    /// Always resumes playback and restarts from position 0, even when
    /// paused ("resume on skip"). Empty queue or no current track: no-op.
    pub fn next(&mut self) {
        self.skip(SkipDirection::Forward);
    }

    /// Skip to the previous track per the ordering policy
    pub fn previous(&mut self) {
        self.skip(SkipDirection::Backward);
    }

    /// Stop playback and clear the current track (but not the queue)
    pub fn stop(&mut self) {
        self.backend.pause();
        self.current = None;
        self.playing = false;
        self.position = 0.0;
        self.duration = 0.0;
        self.emit(PlaybackEvent::StateChanged { is_playing: false });
    }

    /// Empty the queue (session teardown; navigation never does this)
    pub fn clear_queue(&mut self) {
        self.queue.replace(Vec::new());
        self.emit(PlaybackEvent::QueueChanged { length: 0 });
    }

    // ===== Shuffle & Repeat =====

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.emit(PlaybackEvent::ModeChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    /// Flip the repeat flag
    ///
    /// Repeat is pushed down as native looping, so `Ended` events stop
    /// firing for the looped track.
    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
        self.backend.set_loop(self.repeat);
        self.emit(PlaybackEvent::ModeChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    // ===== Volume =====

    /// Set the volume, clamped into [0, 1], and push it to the backend
    pub fn set_volume(&mut self, volume: f32) {
        self.volume.set(volume);
        self.push_volume();
    }

    /// Mute, preserving the stored level
    pub fn mute(&mut self) {
        self.volume.mute();
        self.push_volume();
    }

    /// Unmute, restoring the stored level
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.push_volume();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.push_volume();
    }

    // ===== Backend Events =====

    /// Process one backend event, synchronously
    ///
    /// Events stamped with a generation older than the latest load refer
    /// to a source that has been replaced and are dropped, which makes
    /// `Ended` handling idempotent across a racing user skip.
    pub fn handle_event(&mut self, event: BackendEvent) {
        if event.generation() < self.load_generation {
            debug!(
                event_generation = event.generation(),
                load_generation = self.load_generation,
                "Dropping stale backend event"
            );
            return;
        }

        match event {
            BackendEvent::TimeUpdate { position, .. } => {
                self.position = if self.duration > 0.0 {
                    position.clamp(0.0, self.duration)
                } else {
                    position.max(0.0)
                };
                self.emit(PlaybackEvent::PositionUpdate {
                    position: self.position,
                    duration: self.duration,
                });
            }
            BackendEvent::MetadataLoaded { duration, .. } => {
                self.duration = duration.max(0.0);
                if self.duration > 0.0 && self.position > self.duration {
                    self.position = self.duration;
                }
                self.emit(PlaybackEvent::DurationChanged {
                    duration: self.duration,
                });
            }
            BackendEvent::Ended { .. } => {
                if self.repeat {
                    // Native looping owns repeat; nothing to do
                    debug!("Ignoring ended event while repeat is on");
                    return;
                }
                self.next();
            }
        }
    }

    // ===== State Queries =====

    /// The track the engine considers "now playing"
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Play intent (true even while the backend is silently rejected)
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Known duration in seconds (0 = unknown)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Shuffle flag
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Repeat flag
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Stored volume in [0, 1]
    pub fn volume(&self) -> f32 {
        self.volume.value()
    }

    /// Mute state
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Queued tracks in order
    pub fn queue_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Immutable snapshot of the full engine state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current.clone(),
            is_playing: self.playing,
            position: self.position,
            duration: self.duration,
            shuffle: self.shuffle,
            repeat: self.repeat,
            volume: self.volume.value(),
            is_muted: self.volume.is_muted(),
            queue_length: self.queue.len(),
        }
    }

    /// Drain events emitted since the last call
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn current_id(&self) -> Option<TrackId> {
        self.current.as_ref().map(|t| t.id)
    }

    fn skip(&mut self, direction: SkipDirection) {
        if self.current.is_none() || self.queue.is_empty() {
            return;
        }

        let target = if self.shuffle {
            pick_shuffled_index(self.queue.tracks(), self.current_id(), &mut thread_rng())
        } else {
            match direction {
                SkipDirection::Forward => self.queue.next_index(self.current_id()),
                SkipDirection::Backward => self.queue.previous_index(self.current_id()),
            }
        };

        if let Some(track) = target.and_then(|i| self.queue.get(i)).cloned() {
            self.select_track(track);
        }
    }

    /// Sync the backend to a freshly selected current track
    fn load_current(&mut self) {
        let Some(src) = self.current.as_ref().map(|t| t.src.clone()) else {
            return;
        };

        self.load_generation += 1;
        self.backend.load(&src, self.load_generation);
        self.backend.set_loop(self.repeat);
        self.backend.set_volume(self.volume.effective());
        self.try_play();
    }

    /// Fire-and-forget play: rejection is logged, intent stays "playing"
    /// and the user retries via toggle_play
    fn try_play(&mut self) {
        if let Err(e) = self.backend.play() {
            warn!(error = %e, "Audio backend rejected play");
            self.emit(PlaybackEvent::PlaybackRejected {
                message: e.to_string(),
            });
        }
    }

    fn push_volume(&mut self) {
        self.backend.set_volume(self.volume.effective());
        self.emit(PlaybackEvent::VolumeChanged {
            volume: self.volume.value(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackConfig::default(), Box::new(NullBackend))
    }
}
