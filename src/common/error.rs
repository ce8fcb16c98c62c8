// Error handling types for the client layer

use reqwest::Response;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Client error types
///
/// `Api` carries the backend's `detail` message when the error body was
/// decodable, otherwise the per-operation fallback message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Image processing failed: {0}")]
    Image(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Error response body shape used by the backend
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Build an `ApiError::Api` from a non-success response
    ///
    /// Reads the body as `{ "detail": ... }` and falls back to `fallback`
    /// when the body is absent or not decodable.
    pub async fn from_response(response: Response, fallback: &str) -> Self {
        let status = response.status().as_u16();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);

        if detail.is_none() {
            debug!(status, "Error response carried no detail field");
        }

        ApiError::Api {
            status,
            message: detail.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// HTTP status of an `Api` error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
