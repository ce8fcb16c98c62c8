// src/visits/client.rs
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::models::{RegisterVisitPayload, Visit};
use crate::auth::TokenHolder;
use crate::common::{safe_email_log, ApiError};

/// Visit endpoints of the backend
#[async_trait]
pub trait VisitApi: Send + Sync {
    /// GET /visits/my-visits - visits received by the authenticated user,
    /// newest first
    async fn my_visits(&self) -> Result<Vec<Visit>, ApiError>;

    /// POST /visits/register - record a visit to another user's map
    ///
    /// The backend skips recording when a user opens their own map; the
    /// client does not special-case that.
    async fn register_visit(&self, visited_user_email: &str) -> Result<Visit, ApiError>;
}

/// Stateless request wrapper over the visit endpoints
#[derive(Clone)]
pub struct VisitClient {
    http: Client,
    api_url: String,
    tokens: TokenHolder,
}

impl VisitClient {
    pub fn new(http: Client, api_url: String, tokens: TokenHolder) -> Self {
        Self {
            http,
            api_url,
            tokens,
        }
    }
}

#[async_trait]
impl VisitApi for VisitClient {
    async fn my_visits(&self) -> Result<Vec<Visit>, ApiError> {
        let response = self
            .http
            .get(format!("{}/visits/my-visits", self.api_url))
            .headers(self.tokens.auth_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to load visits").await);
        }

        let visits = response.json::<Vec<Visit>>().await?;
        debug!(count = visits.len(), "Loaded received visits");
        Ok(visits)
    }

    async fn register_visit(&self, visited_user_email: &str) -> Result<Visit, ApiError> {
        let payload = RegisterVisitPayload {
            visited_user_email: visited_user_email.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/visits/register", self.api_url))
            .headers(self.tokens.auth_headers())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to register visit").await);
        }

        let visit = response.json::<Visit>().await?;
        info!(
            visited = %safe_email_log(&visit.visited_user_email),
            "Visit registered"
        );
        Ok(visit)
    }
}
