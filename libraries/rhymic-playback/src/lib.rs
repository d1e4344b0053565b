//! Rhymic - Playback Engine
//!
//! Platform-agnostic playback engine for the Rhymic music player.
//!
//! This crate provides:
//! - Queue management (single ordered list, replaced wholesale per collection)
//! - Next/previous selection (sequential with wrap, or shuffle with no
//!   immediate repeat)
//! - Repeat as native backend looping
//! - Volume control (clamped to [0, 1], mute/unmute)
//! - Seek (clamped into the known duration)
//! - Stale-event rejection via load generations
//!
//! # Architecture
//!
//! The engine is a synchronous, single-threaded state machine. It owns the
//! one audio backend in the process and is the only component allowed to
//! mutate it; everything else reads [`PlaybackSnapshot`]s or drains
//! [`PlaybackEvent`] notifications. The physical audio element is abstracted
//! behind the [`AudioBackend`] trait so the same engine drives a browser
//! `<audio>` element, a desktop decoder, or the deterministic
//! [`SimulatedBackend`] used in tests.
//!
//! Backend callbacks arrive as [`BackendEvent`] values fed into
//! [`PlaybackManager::handle_event`]. Every `load` bumps a generation
//! counter and events stamped with an older generation are dropped, so an
//! `ended` callback from a torn-down source can never advance the queue
//! twice.
//!
//! # Example
//!
//! ```rust
//! use rhymic_core::Track;
//! use rhymic_playback::PlaybackManager;
//!
//! let mut player = PlaybackManager::default();
//!
//! let tracks = vec![
//!     Track::new(1, "First", "Artist", "/covers/1.jpg", "/music/1.mp3"),
//!     Track::new(2, "Second", "Artist", "/covers/2.jpg", "/music/2.mp3"),
//! ];
//!
//! // Seed the queue from a collection, then start a track from it
//! player.replace_queue(tracks.clone());
//! player.select_track(tracks[0].clone());
//! assert!(player.is_playing());
//!
//! // Skip forward; skipping always resumes playback
//! player.next();
//! assert_eq!(player.current_track().map(|t| t.id), Some(2));
//! ```

mod backend;
mod error;
mod events;
mod manager;
mod queue;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use backend::{AudioBackend, BackendEvent, NullBackend, SimulatedBackend, SimulatedState};
pub use error::{BackendError, Result};
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use types::{PlaybackConfig, PlaybackSnapshot};
