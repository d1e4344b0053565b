//! Authentication methods for the Rhymic server.

use crate::error::{ClientError, Result};
use crate::types::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use reqwest::Client;
use rhymic_core::User;
use tracing::{debug, info, warn};

/// Authentication client for the Rhymic server.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password.
    ///
    /// Returns the session token and user summary on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let login_response: LoginResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse login response: {}", e))
            })?;

            info!(
                user_id = login_response.user.id,
                name = %login_response.user.name,
                "Login successful"
            );

            Ok(login_response)
        } else if status.as_u16() == 401 {
            warn!(status = %status, "Login failed: invalid credentials");
            Err(ClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Create a new account.
    ///
    /// The server does not return a session token; call [`login`] after
    /// a successful signup.
    ///
    /// [`login`]: AuthClient::login
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/api/signup", self.base_url);
        debug!(url = %url, email = %email, "Attempting signup");

        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            info!(email = %email, "Signup successful");
            Ok(())
        } else if status.as_u16() == 400 {
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|m| m.message)
                .unwrap_or_else(|_| "Signup rejected".to_string());
            warn!(message = %message, "Signup failed");
            Err(ClientError::SignupFailed(message))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get the current user's profile using a session token.
    pub async fn current_user(&self, token: &str) -> Result<User> {
        let url = format!("{}/api/user/me", self.base_url);
        debug!(url = %url, "Fetching current user");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user profile: {}", e))
            })?;

            Ok(user)
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
}
