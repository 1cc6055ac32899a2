//! Follow entity - an email address subscribed to a listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{RecordId, RecordKind};

/// Follow entity
///
/// At most one follow exists per (listing, email) pair. The email is stored
/// trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub id: RecordId,
    pub listing_id: RecordId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new follow; the email is normalized here
    pub fn new(listing_id: RecordId, email: &str) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Follow),
            listing_id,
            email: Self::normalize_email(email),
            created_at: Utc::now(),
        }
    }

    /// Canonical form used for storage and comparison
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    #[inline]
    pub fn matches(&self, listing_id: &RecordId, normalized_email: &str) -> bool {
        &self.listing_id == listing_id && self.email == normalized_email
    }
}
