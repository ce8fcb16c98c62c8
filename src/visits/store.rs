// src/visits/store.rs
use std::sync::Arc;
use tracing::warn;

use super::client::VisitApi;
use super::models::Visit;

/// Reactive state for the received-visits screen
///
/// Mirrors the marker store's loading/error pattern for its single read
/// operation; no cache layer here.
pub struct VisitStore {
    api: Arc<dyn VisitApi>,
    /// Visits received by the authenticated user
    pub my_visits: Vec<Visit>,
    pub loading: bool,
    pub error: Option<String>,
}

impl VisitStore {
    pub fn new(api: Arc<dyn VisitApi>) -> Self {
        Self {
            api,
            my_visits: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Load the visits received by the current user
    ///
    /// Failures are recorded in `error` and reset the collection; they are
    /// not propagated.
    pub async fn load_my_visits(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.my_visits().await {
            Ok(visits) => {
                self.my_visits = visits;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load visits");
                self.error = Some(e.to_string());
                self.my_visits = Vec::new();
            }
        }

        self.loading = false;
    }

    /// Drop the loaded visits; used on logout
    pub fn clear_visits(&mut self) {
        self.my_visits = Vec::new();
    }
}
