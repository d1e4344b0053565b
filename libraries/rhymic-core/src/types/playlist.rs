//! Playlist domain types

use crate::types::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Playlist list entry as returned by `GET /api/playlists`
///
/// System playlists (curated mixes) are visible to every user; the rest
/// belong to the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Whether this is a server-curated playlist
    #[serde(default)]
    pub is_system: bool,
}

/// Full playlist with resolved tracks, from `GET /api/playlists/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Whether this is a server-curated playlist
    #[serde(default)]
    pub is_system: bool,

    /// Tracks in the playlist
    pub songs: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_is_system() {
        // POST /api/playlists responds without the is_system field
        let json = r#"{"id": 3, "name": "Road Trip"}"#;
        let summary: PlaylistSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 3);
        assert!(!summary.is_system);
    }
}
