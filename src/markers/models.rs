//! Marker data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A placed map marker
///
/// `user_email`, `latitude` and `longitude` are assigned server-side; the
/// backend geocodes `location_name` on creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub user_email: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a marker
///
/// The optional photo travels out-of-band as raw bytes and becomes
/// `image_url` in the request payload after preprocessing.
#[derive(Debug, Clone, Default)]
pub struct MarkerCreate {
    pub location_name: String,
    pub description: Option<String>,
}

/// Wire payload for POST /markers/
#[derive(Serialize, Debug)]
pub(crate) struct MarkerCreatePayload {
    pub location_name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Another user's full published map
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserMapResponse {
    pub user_email: String,
    pub user_name: String,
    pub markers: Vec<Marker>,
}
