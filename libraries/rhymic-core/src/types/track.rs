//! Track domain type

use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A playable track from the catalog
///
/// Immutable once fetched. The wire shape matches the server's song
/// representation exactly, so this deserializes straight from
/// `GET /api/songs` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover art URI
    pub cover: String,

    /// Audio source URI (what the audio backend loads)
    pub src: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        cover: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            cover: cover.into(),
            src: src.into(),
        }
    }
}
