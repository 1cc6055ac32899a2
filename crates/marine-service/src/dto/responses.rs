//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;

use marine_core::{ListingStats, Segment};

/// Label used when an inbox entry outlives its listing
pub const DELETED_LISTING_TITLE: &str = "Listing deleted";

// ============================================================================
// Listing Responses
// ============================================================================

/// Sanitized listing view with its derived interest score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub segment: Segment,
    pub location: String,
    pub year: Option<i32>,
    pub status: String,
    pub cover_image: String,
    pub video_url: String,
    pub highlights: Vec<String>,
    pub gallery: Vec<String>,
    pub description: String,
    pub stats: ListingStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub interest_score: u64,
}

/// `{listings, count}`
#[derive(Debug, Clone, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<ListingResponse>,
    pub count: usize,
}

impl ListingsResponse {
    pub fn new(listings: Vec<ListingResponse>) -> Self {
        Self {
            count: listings.len(),
            listings,
        }
    }
}

/// `{listing}`
#[derive(Debug, Clone, Serialize)]
pub struct ListingEnvelope {
    pub listing: ListingResponse,
}

/// Public detail: the listing plus its comments, newest first
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetailResponse {
    pub listing: ListingResponse,
    pub comments: Vec<CommentResponse>,
}

/// `{deleted: true}`
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Stored comment as shown publicly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub listing_id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// `{comment}`
#[derive(Debug, Clone, Serialize)]
pub struct CommentEnvelope {
    pub comment: CommentResponse,
}

/// Acknowledgement for a submitted message
#[derive(Debug, Clone, Serialize)]
pub struct MessageAccepted {
    pub message: String,
    pub id: String,
}

/// Follow outcome; `message` is set only when already following
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowResponse {
    pub followed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FollowResponse {
    pub fn followed() -> Self {
        Self {
            followed: true,
            message: None,
        }
    }

    pub fn already_following() -> Self {
        Self {
            followed: false,
            message: Some("Already following this listing".to_string()),
        }
    }
}

/// `{unfollowed: true}`
#[derive(Debug, Clone, Serialize)]
pub struct UnfollowResponse {
    pub unfollowed: bool,
}

// ============================================================================
// Admin Inbox Responses
// ============================================================================

/// Message joined with its listing title
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessage {
    pub id: String,
    pub listing_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub ip: String,
    pub status: String,
    pub listing_title: String,
}

/// `{messages, count}`
#[derive(Debug, Clone, Serialize)]
pub struct InboxMessagesResponse {
    pub messages: Vec<InboxMessage>,
    pub count: usize,
}

/// Comment joined with its listing title
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxComment {
    pub id: String,
    pub listing_id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub listing_title: String,
}

/// `{comments, count}`
#[derive(Debug, Clone, Serialize)]
pub struct InboxCommentsResponse {
    pub comments: Vec<InboxComment>,
    pub count: usize,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
