//! Comment entity - a public note left under a listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{RecordId, RecordKind};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: RecordId,
    pub listing_id: RecordId,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(listing_id: RecordId, name: String, message: String) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Comment),
            listing_id,
            name,
            message,
            created_at: Utc::now(),
        }
    }
}
