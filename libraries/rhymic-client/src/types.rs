//! Types for Rhymic server API requests and responses.

use rhymic_core::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Rhymic server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://rhymic.example.com")
    pub url: String,
    /// Current session token (if authenticated)
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    /// Create a config with an existing session token.
    pub fn with_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: Some(token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user summary embedded in a login response.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}

/// Response from successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Request body for signup.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Plain `{"message": ...}` body used by several endpoints.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// Catalog Types
// =============================================================================

/// Request body for the like toggle.
#[derive(Debug, Serialize)]
pub struct LikeToggleRequest {
    pub song_id: TrackId,
}

/// Which way the server resolved a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Added,
    Removed,
}

/// Response from the like toggle.
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub status: LikeStatus,
}

/// Request body for playlist creation.
#[derive(Debug, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

/// Response from playlist creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPlaylist {
    pub id: PlaylistId,
    pub name: String,
}

/// Request body for adding a track to a playlist.
#[derive(Debug, Serialize)]
pub struct AddSongRequest {
    pub playlist_id: PlaylistId,
    pub song_id: TrackId,
}

// =============================================================================
// Recommendation Types
// =============================================================================

/// Request body for the recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct RecommendRequest {
    pub prompt: String,
}
