//! Main Rhymic server client.

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{ClientError, Result};
use crate::recommend::{self, RecommendClient};
use crate::types::{ClientConfig, LoginResponse};
use reqwest::Client;
use rhymic_core::{Track, User};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Main client for interacting with a Rhymic server.
///
/// The client handles authentication and provides access to the song
/// catalog, likes, playlists, and recommendations.
///
/// # Example
///
/// ```ignore
/// use rhymic_client::{ClientConfig, RhymicClient};
///
/// let config = ClientConfig::new("https://rhymic.example.com");
/// let client = RhymicClient::new(config)?;
///
/// let login = client.login("ada@example.com", "password").await?;
/// println!("Logged in as {}", login.user.name);
///
/// let songs = client.songs().await?;
/// println!("Catalog holds {} tracks", songs.len());
///
/// let likes = client.catalog().await?.client().likes().await?;
/// println!("{} liked tracks", likes.len());
/// ```
pub struct RhymicClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl RhymicClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ClientConfig {
            url,
            token: config.token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Rhymic/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has a session token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.token.is_some()
    }

    /// Set the session token directly (e.g., from stored credentials).
    pub async fn set_token(&self, token: String) {
        let mut config = self.config.write().await;
        config.token = Some(token);
    }

    /// Get the current session token.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.token.clone()
    }

    /// Clear the stored token (logout).
    pub async fn logout(&self) {
        let mut config = self.config.write().await;
        config.token = None;
        info!("Logged out");
    }

    /// Login with email and password.
    ///
    /// On success, the session token is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.config.read().await.url.clone();

        let auth_client = AuthClient::new(&self.http, &url);
        let response = auth_client.login(email, password).await?;

        let mut config = self.config.write().await;
        config.token = Some(response.token.clone());

        Ok(response)
    }

    /// Create a new account, then login with the same credentials.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.config.read().await.url.clone();

        let auth_client = AuthClient::new(&self.http, &url);
        auth_client.signup(name, email, password).await?;

        self.login(email, password).await
    }

    /// Get the current user's profile.
    ///
    /// Returns an error if not authenticated. A rejected token clears the
    /// stored session, so the caller lands back at the login flow.
    pub async fn current_user(&self) -> Result<User> {
        let config = self.config.read().await;
        let token = config.token.clone().ok_or(ClientError::AuthRequired)?;
        let url = config.url.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &url);
        match auth_client.current_user(&token).await {
            Err(ClientError::AuthRequired) => {
                warn!("Session token rejected, clearing stored session");
                self.config.write().await.token = None;
                Err(ClientError::AuthRequired)
            }
            other => other,
        }
    }

    /// Fetch the full song catalog.
    ///
    /// This does not require authentication.
    pub async fn songs(&self) -> Result<Vec<Track>> {
        let config = self.config.read().await;
        let url = format!("{}/api/songs", config.url);
        drop(config);

        debug!(url = %url, "Fetching song catalog");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let songs: Vec<Track> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse song catalog: {}", e))
            })?;

            debug!(count = songs.len(), "Fetched song catalog");
            Ok(songs)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get recommendations for a free-text prompt.
    ///
    /// Falls back to a random sample from `catalog` when the endpoint
    /// fails, times out, or returns nothing, so the caller always gets
    /// something to play.
    pub async fn recommend(&self, prompt: &str, catalog: &[Track]) -> Vec<Track> {
        let url = self.config.read().await.url.clone();

        let recommend_client = RecommendClient::new(&self.http, &url);
        match recommend_client.recommend(prompt).await {
            Ok(tracks) if !tracks.is_empty() => tracks,
            Ok(_) => {
                debug!("Recommendation endpoint returned nothing, using local sample");
                recommend::fallback_recommendations(catalog)
            }
            Err(e) => {
                warn!(error = %e, "Recommendation request failed, using local sample");
                recommend::fallback_recommendations(catalog)
            }
        }
    }

    /// Get a catalog client handle for likes and playlist operations.
    ///
    /// Returns an error if not authenticated.
    pub async fn catalog(&self) -> Result<CatalogClientHandle> {
        let config = self.config.read().await;
        let token = config.token.clone().ok_or(ClientError::AuthRequired)?;
        let url = config.url.clone();
        drop(config);

        Ok(CatalogClientHandle {
            http: self.http.clone(),
            url,
            token,
        })
    }
}

/// Handle for authenticated catalog operations.
///
/// Returned by [`RhymicClient::catalog`]; use `.client()` to get a
/// [`CatalogClient`] with proper lifetime bounds.
#[derive(Debug)]
pub struct CatalogClientHandle {
    http: Client,
    url: String,
    token: String,
}

impl CatalogClientHandle {
    /// Get the catalog client.
    pub fn client(&self) -> CatalogClient<'_> {
        CatalogClient::new(&self.http, &self.url, &self.token)
    }
}
