// src/auth/client.rs
use reqwest::Client;
use reqwest::StatusCode;
use tracing::{debug, error, info, warn};

use super::models::User;
use super::session::TokenHolder;
use crate::common::safe_email_log;

/// Session endpoints: login redirect, logout, current user
///
/// Stateless apart from the shared [`TokenHolder`]; one instance per
/// application is expected but nothing enforces it.
#[derive(Clone)]
pub struct SessionClient {
    http: Client,
    api_url: String,
    tokens: TokenHolder,
}

impl SessionClient {
    pub fn new(http: Client, api_url: String, tokens: TokenHolder) -> Self {
        Self {
            http,
            api_url,
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenHolder {
        &self.tokens
    }

    /// URL of the Google OAuth entry point
    ///
    /// This is a full-page redirect target for the embedding UI, not a
    /// fetchable JSON endpoint.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login/google", self.api_url)
    }

    /// End the session
    ///
    /// Notifies the backend best-effort (the JWT is stateless server-side,
    /// so failures are logged and swallowed), then unconditionally clears
    /// the in-memory and persisted token.
    pub async fn logout(&self) {
        let result = self
            .http
            .post(format!("{}/auth/logout", self.api_url))
            .headers(self.tokens.auth_headers())
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!("Backend acknowledged logout");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Logout endpoint returned an error");
            }
            Err(e) => {
                error!(error = %e, "Failed to notify backend of logout");
            }
        }

        self.tokens.clear();
        info!("Session closed");
    }

    /// Fetch the authenticated user's profile
    ///
    /// Returns `None` without a network call when no token is held. A 401
    /// response means the token is no longer valid and triggers a logout as
    /// a side effect. Any other failure is logged and reported as absence,
    /// never as an error to the caller.
    pub async fn current_user(&self) -> Option<User> {
        if !self.tokens.is_authenticated() {
            return None;
        }

        let result = self
            .http
            .get(format!("{}/auth/me", self.api_url))
            .headers(self.tokens.auth_headers())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Failed to fetch current user");
                return None;
            }
        };

        if response.status() == StatusCode::UNAUTHORIZED {
            info!("Session token rejected by backend, logging out");
            self.logout().await;
            return None;
        }

        if !response.status().is_success() {
            error!(status = %response.status(), "Current-user endpoint returned an error");
            return None;
        }

        match response.json::<User>().await {
            Ok(user) => {
                debug!(email = %safe_email_log(&user.email), "Fetched current user");
                Some(user)
            }
            Err(e) => {
                error!(error = %e, "Failed to decode current user response");
                None
            }
        }
    }
}
