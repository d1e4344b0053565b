//! Prompt-based track recommendations.
//!
//! The server endpoint proxies a language model and can be slow or
//! unavailable. Requests carry a short timeout and callers fall back to
//! a random local sample when the endpoint fails.

use crate::error::{ClientError, Result};
use crate::types::RecommendRequest;
use rand::seq::SliceRandom;
use reqwest::Client;
use rhymic_core::Track;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout for the recommendation endpoint.
const RECOMMEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of tracks in a fallback sample.
const FALLBACK_COUNT: usize = 10;

/// Recommendation client for the Rhymic server.
pub struct RecommendClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> RecommendClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Ask the server for tracks matching a free-text prompt.
    pub async fn recommend(&self, prompt: &str) -> Result<Vec<Track>> {
        let url = format!("{}/api/ai/recommend", self.base_url);
        debug!(url = %url, prompt = %prompt, "Requesting recommendations");

        let response = self
            .http
            .post(&url)
            .timeout(RECOMMEND_TIMEOUT)
            .json(&RecommendRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let tracks: Vec<Track> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse recommendations: {}", e))
            })?;

            debug!(count = tracks.len(), "Received recommendations");
            Ok(tracks)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// Random sample of up to ten tracks from the local catalog.
///
/// Used when the recommendation endpoint is unreachable, slow, or
/// returns an empty result.
pub fn fallback_recommendations(catalog: &[Track]) -> Vec<Track> {
    let mut rng = rand::thread_rng();
    catalog
        .choose_multiple(&mut rng, FALLBACK_COUNT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: i64) -> Track {
        Track::new(id, format!("Track {id}"), "Artist", "", "")
    }

    #[test]
    fn fallback_caps_at_ten() {
        let catalog: Vec<Track> = (1..=50).map(track).collect();
        let picks = fallback_recommendations(&catalog);
        assert_eq!(picks.len(), 10);
    }

    #[test]
    fn fallback_with_small_catalog_returns_everything() {
        let catalog: Vec<Track> = (1..=3).map(track).collect();
        let picks = fallback_recommendations(&catalog);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn fallback_with_empty_catalog_is_empty() {
        assert!(fallback_recommendations(&[]).is_empty());
    }

    #[test]
    fn fallback_has_no_duplicates() {
        let catalog: Vec<Track> = (1..=20).map(track).collect();
        let picks = fallback_recommendations(&catalog);
        let mut ids: Vec<i64> = picks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), picks.len());
    }
}
