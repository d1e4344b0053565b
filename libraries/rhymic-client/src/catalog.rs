//! Authenticated catalog operations: likes and playlists.

use crate::error::{ClientError, Result};
use crate::types::{
    AddSongRequest, CreatePlaylistRequest, CreatedPlaylist, LikeStatus, LikeToggleRequest,
    LikeToggleResponse,
};
use reqwest::Client;
use rhymic_core::{Playlist, PlaylistId, PlaylistSummary, TrackId};
use tracing::debug;

/// Catalog client for the Rhymic server.
pub struct CatalogClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get the ids of the current user's liked tracks.
    pub async fn likes(&self) -> Result<Vec<TrackId>> {
        let url = format!("{}/api/likes", self.base_url);
        debug!(url = %url, "Fetching likes");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let ids: Vec<TrackId> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse likes: {}", e)))?;

        debug!(count = ids.len(), "Fetched likes");
        Ok(ids)
    }

    /// Toggle the like on a track.
    ///
    /// The server decides the direction; the returned status says whether
    /// the like was added or removed.
    pub async fn toggle_like(&self, song_id: TrackId) -> Result<LikeStatus> {
        let url = format!("{}/api/likes", self.base_url);
        debug!(url = %url, song_id, "Toggling like");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token)
            .json(&LikeToggleRequest { song_id })
            .send()
            .await?;
        let response = Self::check(response).await?;

        let toggle: LikeToggleResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse like toggle response: {}", e))
        })?;

        Ok(toggle.status)
    }

    /// List the user's playlists, system playlists first.
    pub async fn playlists(&self) -> Result<Vec<PlaylistSummary>> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let playlists: Vec<PlaylistSummary> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse playlists: {}", e)))?;

        Ok(playlists)
    }

    /// Get a playlist with its full track list.
    pub async fn playlist_details(&self, playlist_id: PlaylistId) -> Result<Playlist> {
        let url = format!("{}/api/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, "Fetching playlist details");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let playlist: Playlist = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse playlist details: {}", e))
        })?;

        debug!(
            playlist_id = playlist.id,
            tracks = playlist.songs.len(),
            "Fetched playlist"
        );
        Ok(playlist)
    }

    /// Create a new playlist.
    pub async fn create_playlist(&self, name: &str) -> Result<CreatedPlaylist> {
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, name = %name, "Creating playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token)
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        let response = Self::check(response).await?;

        let created: CreatedPlaylist = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse created playlist: {}", e))
        })?;

        Ok(created)
    }

    /// Add a track to one of the user's playlists.
    ///
    /// Adding a track that is already in the playlist is a no-op on the
    /// server side.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: PlaylistId,
        song_id: TrackId,
    ) -> Result<()> {
        let url = format!("{}/api/playlists/add_song", self.base_url);
        debug!(url = %url, playlist_id, song_id, "Adding song to playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token)
            .json(&AddSongRequest {
                playlist_id,
                song_id,
            })
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }
}
