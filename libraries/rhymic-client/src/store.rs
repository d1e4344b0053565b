//! Local catalog state with optimistic like toggling.
//!
//! The store mirrors server-side state (songs, likes, playlists) so UI
//! surfaces render without waiting on the network. Like toggles flip the
//! local set immediately; the matching server call resolves later and
//! either confirms the flip or rolls it back.

use crate::error::Result;
use crate::types::LikeStatus;
use rhymic_core::{PlaylistSummary, Track, TrackId};
use std::collections::HashSet;
use tracing::warn;

/// Record of an in-flight like toggle, held until the server responds.
#[derive(Debug, Clone, Copy)]
pub struct PendingLike {
    /// Track the toggle applies to
    pub song_id: TrackId,
    /// Local like state before the optimistic flip
    was_liked: bool,
}

/// Client-side mirror of the user's catalog state.
#[derive(Debug, Default)]
pub struct CatalogStore {
    songs: Vec<Track>,
    liked: HashSet<TrackId>,
    playlists: Vec<PlaylistSummary>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Server state ingestion =====

    /// Replace the song catalog.
    pub fn set_songs(&mut self, songs: Vec<Track>) {
        self.songs = songs;
    }

    /// Replace the liked-track set.
    pub fn set_likes(&mut self, ids: impl IntoIterator<Item = TrackId>) {
        self.liked = ids.into_iter().collect();
    }

    /// Replace the playlist listing.
    pub fn set_playlists(&mut self, playlists: Vec<PlaylistSummary>) {
        self.playlists = playlists;
    }

    // ===== Views =====

    /// The full song catalog.
    pub fn songs(&self) -> &[Track] {
        &self.songs
    }

    /// The playlist listing.
    pub fn playlists(&self) -> &[PlaylistSummary] {
        &self.playlists
    }

    /// Whether a track is currently liked (including optimistic flips).
    pub fn is_liked(&self, song_id: TrackId) -> bool {
        self.liked.contains(&song_id)
    }

    /// Liked tracks in catalog order.
    pub fn liked_tracks(&self) -> Vec<Track> {
        self.songs
            .iter()
            .filter(|t| self.liked.contains(&t.id))
            .cloned()
            .collect()
    }

    /// Look up a track by id.
    pub fn find_track(&self, song_id: TrackId) -> Option<&Track> {
        self.songs.iter().find(|t| t.id == song_id)
    }

    // ===== Optimistic like toggle =====

    /// Flip the local like state immediately and record the prior state.
    ///
    /// The returned record must be passed to [`resolve_like_toggle`] once
    /// the server call completes.
    ///
    /// [`resolve_like_toggle`]: CatalogStore::resolve_like_toggle
    pub fn begin_like_toggle(&mut self, song_id: TrackId) -> PendingLike {
        let was_liked = self.liked.contains(&song_id);
        if was_liked {
            self.liked.remove(&song_id);
        } else {
            self.liked.insert(song_id);
        }
        PendingLike { song_id, was_liked }
    }

    /// Settle an optimistic toggle against the server's outcome.
    ///
    /// On success the local state is forced to match what the server
    /// decided. On failure the flip is rolled back to the recorded prior
    /// state.
    pub fn resolve_like_toggle(&mut self, pending: PendingLike, outcome: Result<LikeStatus>) {
        match outcome {
            Ok(LikeStatus::Added) => {
                self.liked.insert(pending.song_id);
            }
            Ok(LikeStatus::Removed) => {
                self.liked.remove(&pending.song_id);
            }
            Err(e) => {
                warn!(song_id = pending.song_id, error = %e, "Like toggle failed, rolling back");
                if pending.was_liked {
                    self.liked.insert(pending.song_id);
                } else {
                    self.liked.remove(&pending.song_id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn track(id: TrackId) -> Track {
        Track::new(id, format!("Track {id}"), "Artist", "", "")
    }

    fn store_with_songs(ids: &[TrackId]) -> CatalogStore {
        let mut store = CatalogStore::new();
        store.set_songs(ids.iter().copied().map(track).collect());
        store
    }

    #[test]
    fn begin_toggle_flips_immediately() {
        let mut store = store_with_songs(&[1, 2]);
        assert!(!store.is_liked(1));

        let pending = store.begin_like_toggle(1);
        assert!(store.is_liked(1));
        assert_eq!(pending.song_id, 1);
    }

    #[test]
    fn confirmed_toggle_sticks() {
        let mut store = store_with_songs(&[1]);

        let pending = store.begin_like_toggle(1);
        store.resolve_like_toggle(pending, Ok(LikeStatus::Added));
        assert!(store.is_liked(1));

        let pending = store.begin_like_toggle(1);
        store.resolve_like_toggle(pending, Ok(LikeStatus::Removed));
        assert!(!store.is_liked(1));
    }

    #[test]
    fn failed_toggle_rolls_back() {
        let mut store = store_with_songs(&[1]);

        let pending = store.begin_like_toggle(1);
        assert!(store.is_liked(1));
        store.resolve_like_toggle(pending, Err(ClientError::AuthRequired));
        assert!(!store.is_liked(1));
    }

    #[test]
    fn failed_unlike_rolls_back_to_liked() {
        let mut store = store_with_songs(&[1]);
        store.set_likes([1]);

        let pending = store.begin_like_toggle(1);
        assert!(!store.is_liked(1));
        store.resolve_like_toggle(
            pending,
            Err(ClientError::ServerUnreachable("connection refused".into())),
        );
        assert!(store.is_liked(1));
    }

    #[test]
    fn server_outcome_wins_over_local_flip() {
        // A second device unliked the track between our fetch and toggle;
        // the server reports "added" and the local set must agree.
        let mut store = store_with_songs(&[1]);
        store.set_likes([1]);

        let pending = store.begin_like_toggle(1);
        store.resolve_like_toggle(pending, Ok(LikeStatus::Added));
        assert!(store.is_liked(1));
    }

    #[test]
    fn liked_tracks_follow_catalog_order() {
        let mut store = store_with_songs(&[3, 1, 2]);
        store.set_likes([2, 3]);

        let ids: Vec<TrackId> = store.liked_tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn find_track_by_id() {
        let store = store_with_songs(&[1, 2]);
        assert_eq!(store.find_track(2).map(|t| t.id), Some(2));
        assert!(store.find_track(99).is_none());
    }
}
