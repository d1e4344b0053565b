//! Rhymic Server Client
//!
//! HTTP client library for the Rhymic server API.
//!
//! # Features
//!
//! - **Authentication**: Signup, login with email/password, session tokens
//! - **Catalog**: Song listing, likes, playlists
//! - **Recommendations**: Prompt-based suggestions with a local fallback
//! - **Local state**: [`CatalogStore`] mirror with optimistic like toggling
//!
//! # Example
//!
//! ```ignore
//! use rhymic_client::{CatalogStore, ClientConfig, RhymicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://rhymic.example.com");
//!     let client = RhymicClient::new(config)?;
//!
//!     client.login("ada@example.com", "password").await?;
//!
//!     let mut store = CatalogStore::new();
//!     store.set_songs(client.songs().await?);
//!
//!     let catalog = client.catalog().await?;
//!     store.set_likes(catalog.client().likes().await?);
//!
//!     // Optimistic like toggle
//!     let pending = store.begin_like_toggle(42);
//!     let outcome = catalog.client().toggle_like(42).await;
//!     store.resolve_like_toggle(pending, outcome);
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod recommend;
mod store;
mod types;

// Re-export main types
pub use client::{CatalogClientHandle, RhymicClient};
pub use error::{ClientError, Result};
pub use store::{CatalogStore, PendingLike};
pub use types::{
    ClientConfig, CreatedPlaylist, LikeStatus, LoginResponse, SessionUser, SignupRequest,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use recommend::{fallback_recommendations, RecommendClient};
