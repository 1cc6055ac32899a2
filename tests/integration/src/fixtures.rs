//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of the responses the
//! tests inspect.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Listing body accepted by the admin create endpoint
pub fn listing_body(title: &str) -> Value {
    json!({
        "title": title,
        "segment": "new-build",
        "location": "Bodrum",
        "year": 2024,
        "highlights": "carbon mast, twin rudders",
        "description": "Performance cruiser under construction"
    })
}

/// Private message request
#[derive(Debug, Serialize)]
pub struct MessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageRequest {
    pub fn sample() -> Self {
        Self {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Is the hull still available?".to_string(),
        }
    }
}

/// Follow request
#[derive(Debug, Serialize)]
pub struct FollowRequest {
    pub email: String,
}

impl FollowRequest {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }
}

/// Engagement counters as serialized
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub messages: u32,
    pub follows: u32,
    pub comments: u32,
}

/// Listing as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub segment: String,
    pub location: String,
    pub year: Option<i32>,
    pub status: String,
    pub highlights: Vec<String>,
    pub stats: Stats,
    pub interest_score: u64,
}

/// `{listing}`
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    pub listing: Listing,
}

/// `{listings, count}`
#[derive(Debug, Deserialize)]
pub struct ListingList {
    pub listings: Vec<Listing>,
    pub count: usize,
}

impl ListingList {
    pub fn titles(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.title.as_str()).collect()
    }
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}
