//! Session data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as returned by GET /auth/me
///
/// Created by the backend on first OAuth login; read-only on this side.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub oauth_provider: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Query parameters delivered to the OAuth callback view
///
/// The callback route receives either a bearer token or an error string;
/// the token is handed to [`super::TokenHolder::set_token`].
#[derive(Deserialize, Debug, Default)]
pub struct AuthCallbackParams {
    pub token: Option<String>,
    pub error: Option<String>,
}
