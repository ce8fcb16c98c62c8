// src/markers/store.rs
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::client::MarkerApi;
use super::models::{Marker, MarkerCreate, UserMapResponse};
use crate::common::ApiError;

/// How long a successful my-markers fetch stays fresh
pub const CACHE_DURATION: Duration = Duration::from_secs(5 * 60);

/// Reactive state for the marker screens
///
/// Holds the last-fetched collections together with `loading`/`error`
/// flags the UI binds to. Read operations record failures in `error` only;
/// write operations additionally propagate them so callers can react.
pub struct MarkerStore {
    api: Arc<dyn MarkerApi>,
    /// The authenticated user's markers
    pub my_markers: Vec<Marker>,
    /// Snapshot of the map currently being visited, if any
    pub visited_user_map: Option<UserMapResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub(crate) last_fetch: Option<Instant>,
}

impl MarkerStore {
    pub fn new(api: Arc<dyn MarkerApi>) -> Self {
        Self {
            api,
            my_markers: Vec::new(),
            visited_user_map: None,
            loading: false,
            error: None,
            last_fetch: None,
        }
    }

    /// Load the user's markers, serving from cache when fresh
    ///
    /// The fetch is skipped when not forced, the collection is non-empty
    /// and the last successful fetch is under five minutes old. Failures
    /// are recorded in `error` and reset the collection; they are not
    /// propagated.
    pub async fn load_my_markers(&mut self, force: bool) {
        let fresh = self
            .last_fetch
            .map(|at| at.elapsed() < CACHE_DURATION)
            .unwrap_or(false);
        if !force && !self.my_markers.is_empty() && fresh {
            debug!("Serving my-markers from cache");
            return;
        }

        self.loading = true;
        self.error = None;

        match self.api.my_markers().await {
            Ok(markers) => {
                self.my_markers = markers;
                self.last_fetch = Some(Instant::now());
            }
            Err(e) => {
                warn!(error = %e, "Failed to load markers");
                self.error = Some(e.to_string());
                self.my_markers = Vec::new();
            }
        }

        self.loading = false;
    }

    /// Create a marker and append the server-confirmed result
    ///
    /// The cache stamp is deliberately left alone: local writes mutate the
    /// collection directly without extending or resetting the TTL.
    pub async fn create_marker(
        &mut self,
        data: &MarkerCreate,
        image: Option<&[u8]>,
    ) -> Result<Marker, ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.create_marker(data, image).await;
        self.loading = false;

        match result {
            Ok(marker) => {
                self.my_markers.push(marker.clone());
                Ok(marker)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Delete a marker and remove it from the collection
    pub async fn delete_marker(&mut self, marker_id: &str) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.delete_marker(marker_id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.my_markers.retain(|m| m.id != marker_id);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replace a marker's photo and swap in the updated entity
    pub async fn update_marker_image(
        &mut self,
        marker_id: &str,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.update_marker_image(marker_id, filename, image).await;
        self.loading = false;

        match result {
            Ok(updated) => {
                if let Some(slot) = self.my_markers.iter_mut().find(|m| m.id == marker_id) {
                    *slot = updated;
                }
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Load another user's map; never cached
    pub async fn load_user_map(&mut self, email: &str) -> Result<(), ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.user_map(email).await;
        self.loading = false;

        match result {
            Ok(map) => {
                self.visited_user_map = Some(map);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.visited_user_map = None;
                Err(e)
            }
        }
    }

    /// Drop all cached marker state; used on logout to avoid leaking one
    /// user's markers into the next session
    pub fn clear_cache(&mut self) {
        self.my_markers = Vec::new();
        self.visited_user_map = None;
        self.last_fetch = None;
    }

    /// Drop only the visited-map snapshot, on navigating away
    pub fn clear_visited_map(&mut self) {
        self.visited_user_map = None;
    }
}
