//! Listing entity - a boat project advertised on the marketplace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::value_objects::{RecordId, RecordKind, Segment};

/// Status given to listings created without one
pub const DEFAULT_LISTING_STATUS: &str = "planned";

/// Engagement counters kept on each listing
///
/// Maintained incrementally as engagement records are added or removed;
/// never recomputed from the record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingStats {
    #[serde(default)]
    pub messages: u32,
    #[serde(default)]
    pub follows: u32,
    #[serde(default)]
    pub comments: u32,
}

/// Weighted engagement: 3 per message, 2 per follow, 1 per comment.
pub fn interest_score(stats: &ListingStats) -> u64 {
    u64::from(stats.messages) * 3 + u64::from(stats.follows) * 2 + u64::from(stats.comments)
}

/// Listing entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::segment")]
    pub segment: Segment,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub cover_image: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub video_url: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub stats: ListingStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing with a fresh id, default fields and zeroed stats
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::generate(RecordKind::Listing),
            title,
            segment: Segment::default(),
            location: String::new(),
            year: None,
            status: DEFAULT_LISTING_STATUS.to_string(),
            cover_image: String::new(),
            video_url: String::new(),
            highlights: Vec::new(),
            gallery: Vec::new(),
            description: String::new(),
            stats: ListingStats::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Derived ranking value; never stored
    #[inline]
    pub fn interest_score(&self) -> u64 {
        interest_score(&self.stats)
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match against title, location and description.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.title, &self.location, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn record_message(&mut self) {
        self.stats.messages = self.stats.messages.saturating_add(1);
        self.touch();
    }

    pub fn record_comment(&mut self) {
        self.stats.comments = self.stats.comments.saturating_add(1);
        self.touch();
    }

    pub fn record_follow(&mut self) {
        self.stats.follows = self.stats.follows.saturating_add(1);
        self.touch();
    }

    /// Drop one follow, never going below zero
    pub fn release_follow(&mut self) {
        self.stats.follows = self.stats.follows.saturating_sub(1);
        self.touch();
    }
}
