// src/markers/client.rs
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info};

use super::models::{Marker, MarkerCreate, MarkerCreatePayload, UserMapResponse};
use crate::auth::TokenHolder;
use crate::common::{safe_email_log, ApiError};
use crate::services::image::{compress_to_data_url, sniff_mime};

/// Marker endpoints of the backend
///
/// Object-safe so stores can be tested against a fake implementation.
#[async_trait]
pub trait MarkerApi: Send + Sync {
    /// POST /markers/ - create a marker, preprocessing the photo if supplied
    async fn create_marker(
        &self,
        data: &MarkerCreate,
        image: Option<&[u8]>,
    ) -> Result<Marker, ApiError>;

    /// GET /markers/my-markers - the authenticated user's markers
    async fn my_markers(&self) -> Result<Vec<Marker>, ApiError>;

    /// GET /markers/user/{email} - another user's published map
    async fn user_map(&self, email: &str) -> Result<UserMapResponse, ApiError>;

    /// DELETE /markers/{id}
    async fn delete_marker(&self, marker_id: &str) -> Result<(), ApiError>;

    /// PUT /markers/{id}/image - replace a marker's photo (multipart upload)
    async fn update_marker_image(
        &self,
        marker_id: &str,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<Marker, ApiError>;
}

/// Stateless request wrapper over the marker endpoints
#[derive(Clone)]
pub struct MarkerClient {
    http: Client,
    api_url: String,
    tokens: TokenHolder,
}

impl MarkerClient {
    pub fn new(http: Client, api_url: String, tokens: TokenHolder) -> Self {
        Self {
            http,
            api_url,
            tokens,
        }
    }
}

#[async_trait]
impl MarkerApi for MarkerClient {
    async fn create_marker(
        &self,
        data: &MarkerCreate,
        image: Option<&[u8]>,
    ) -> Result<Marker, ApiError> {
        // Preprocess before touching the network: a bad photo aborts the
        // whole operation
        let image_url = match image {
            Some(bytes) => Some(compress_to_data_url(bytes)?),
            None => None,
        };

        let payload = MarkerCreatePayload {
            location_name: data.location_name.clone(),
            description: data.description.clone(),
            image_url,
        };

        let response = self
            .http
            .post(format!("{}/markers/", self.api_url))
            .headers(self.tokens.auth_headers())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to create marker").await);
        }

        let marker = response.json::<Marker>().await?;
        info!(marker_id = %marker.id, location = %marker.location_name, "Marker created");
        Ok(marker)
    }

    async fn my_markers(&self) -> Result<Vec<Marker>, ApiError> {
        let response = self
            .http
            .get(format!("{}/markers/my-markers", self.api_url))
            .headers(self.tokens.auth_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to load markers").await);
        }

        let markers = response.json::<Vec<Marker>>().await?;
        debug!(count = markers.len(), "Loaded own markers");
        Ok(markers)
    }

    async fn user_map(&self, email: &str) -> Result<UserMapResponse, ApiError> {
        let response = self
            .http
            .get(format!(
                "{}/markers/user/{}",
                self.api_url,
                urlencoding::encode(email)
            ))
            .headers(self.tokens.auth_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "User not found").await);
        }

        let map = response.json::<UserMapResponse>().await?;
        debug!(
            user = %safe_email_log(&map.user_email),
            markers = map.markers.len(),
            "Loaded user map"
        );
        Ok(map)
    }

    async fn delete_marker(&self, marker_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/markers/{}", self.api_url, marker_id))
            .headers(self.tokens.auth_headers())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to delete marker").await);
        }

        info!(marker_id = %marker_id, "Marker deleted");
        Ok(())
    }

    async fn update_marker_image(
        &self,
        marker_id: &str,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<Marker, ApiError> {
        let mime = sniff_mime(&image).unwrap_or("application/octet-stream");
        let part = Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("image", part);

        // No JSON content type here: reqwest sets the multipart boundary
        let mut request = self
            .http
            .put(format!("{}/markers/{}/image", self.api_url, marker_id))
            .multipart(form);
        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to update image").await);
        }

        let marker = response.json::<Marker>().await?;
        info!(marker_id = %marker.id, "Marker image updated");
        Ok(marker)
    }
}
