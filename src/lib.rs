//! # MiMapa client
//!
//! Client data layer of the MiMapa application: authenticated users place
//! named map markers (with optional photo and description) and visit each
//! other's maps. This crate covers the session token, the resource clients
//! over the backend HTTP API, photo preprocessing before upload, and the
//! reactive stores a UI observes. Routing and presentation live elsewhere.

use std::sync::Arc;

pub mod auth;
pub mod common;
pub mod markers;
pub mod services;
pub mod visits;

// Re-export the types most callers need
pub use auth::{AuthCallbackParams, SessionClient, TokenHolder, User};
pub use common::{ApiError, Config};
pub use markers::{Marker, MarkerCreate, MarkerStore, UserMapResponse};
pub use visits::{Visit, VisitStore};

use auth::FileTokenStorage;
use markers::MarkerClient;
use visits::VisitClient;

/// Wired-up client: one shared HTTP client and token holder behind the
/// session, marker and visit clients
///
/// Construct once at application start; the stores hand out reactive state
/// on top of the shared clients. Everything here is injectable, so tests
/// substitute fakes at the trait seams instead of patching globals.
#[derive(Clone)]
pub struct MiMapaClient {
    tokens: TokenHolder,
    session: SessionClient,
    markers: MarkerClient,
    visits: VisitClient,
}

impl MiMapaClient {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        let storage = Arc::new(FileTokenStorage::new(config.token_file.clone()));
        let tokens = TokenHolder::new(storage);

        Self {
            session: SessionClient::new(http.clone(), config.api_url.clone(), tokens.clone()),
            markers: MarkerClient::new(http.clone(), config.api_url.clone(), tokens.clone()),
            visits: VisitClient::new(http, config.api_url, tokens.clone()),
            tokens,
        }
    }

    /// Build from MIMAPA_* environment variables
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn tokens(&self) -> &TokenHolder {
        &self.tokens
    }

    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    /// Fresh marker store over the shared marker client
    pub fn marker_store(&self) -> MarkerStore {
        MarkerStore::new(Arc::new(self.markers.clone()))
    }

    /// Fresh visit store over the shared visit client
    pub fn visit_store(&self) -> VisitStore {
        VisitStore::new(Arc::new(self.visits.clone()))
    }
}
