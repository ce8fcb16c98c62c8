//! Visit data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded visit to a user's map
///
/// Append-only: created when one user opens another's map, never mutated
/// or deleted from this side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: String,
    pub visited_user_email: String,
    pub visitor_email: String,
    pub visitor_oauth_id: String,
    pub visited_at: DateTime<Utc>,
}

/// Wire payload for POST /visits/register
#[derive(Serialize, Debug)]
pub(crate) struct RegisterVisitPayload {
    pub visited_user_email: String,
}
