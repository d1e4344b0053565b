//! Rhymic Core
//!
//! Shared domain types for the Rhymic music player.
//!
//! This crate defines the data model used by both the playback engine
//! (`rhymic-playback`) and the server client (`rhymic-client`):
//! - **Domain Types**: `Track`, `Playlist`, `PlaylistSummary`, `User`
//! - **Identifiers**: `TrackId`, `PlaylistId`, `UserId` (server-assigned
//!   integer keys)
//!
//! Types are plain serde-serializable values with no behavior beyond
//! constructors and accessors. Tracks are immutable once fetched.

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{Playlist, PlaylistId, PlaylistSummary, Track, TrackId, User, UserId};
