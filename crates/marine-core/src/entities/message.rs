//! Message entity - a private inquiry sent to the listing owner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::value_objects::{RecordId, RecordKind};

/// Status given to freshly received messages
pub const DEFAULT_MESSAGE_STATUS: &str = "new";

/// Message entity
///
/// Immutable once stored; only removed when its listing is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: RecordId,
    pub listing_id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ip: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_MESSAGE_STATUS.to_string()
}

impl Message {
    /// Create a new message for a listing
    pub fn new(
        listing_id: RecordId,
        name: String,
        email: String,
        phone: String,
        message: String,
        ip: String,
    ) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Message),
            listing_id,
            name,
            email,
            phone,
            message,
            created_at: Utc::now(),
            ip,
            status: default_status(),
        }
    }

    /// Whether a phone number was left
    #[inline]
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}
