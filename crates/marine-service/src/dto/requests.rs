//! Request DTOs for API endpoints
//!
//! Listing bodies implement `Validate`; engagement bodies and queries only
//! `Deserialize`. Required text fields default to empty so that a missing
//! field and a blank one fail the same way.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::fields::{present, TextList, YearInput};

/// Rejects strings that are empty after trimming
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ============================================================================
// Listing Requests
// ============================================================================

/// Create listing request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,

    /// Free text, normalized to one of the known segments
    #[serde(default)]
    pub segment: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub year: Option<YearInput>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub highlights: TextList,

    #[serde(default)]
    pub gallery: TextList,

    #[serde(default)]
    pub description: Option<String>,
}

/// Partial listing update
///
/// `None` leaves a field untouched; `Some(None)` is an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub segment: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub year: Option<YearInput>,

    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub cover_image: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub video_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub highlights: Option<TextList>,

    #[serde(default, deserialize_with = "present")]
    pub gallery: Option<TextList>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

/// Sort order for the public catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingSort {
    /// Descending interest score, ties by most recently updated
    #[default]
    Interest,
    /// Most recently updated first
    Recent,
}

impl ListingSort {
    /// Only `recent` selects the recency order; anything else ranks by interest
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("recent") {
            Self::Recent
        } else {
            Self::Interest
        }
    }
}

/// Public catalogue query: `?segment=&search=&sort=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub segment: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Lower-cased segment filter; `None` when empty or `all`
    pub fn segment_filter(&self) -> Option<String> {
        self.segment
            .as_deref()
            .map(str::to_lowercase)
            .filter(|segment| !segment.is_empty() && segment != "all")
    }

    /// Lower-cased search needle; `None` when empty
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|needle| !needle.is_empty())
    }

    pub fn sort_order(&self) -> ListingSort {
        self.sort.as_deref().map(ListingSort::parse).unwrap_or_default()
    }
}

// ============================================================================
// Engagement Requests
// ============================================================================

/// Private message to the listing owner
///
/// Required fields are checked by the service once the listing is known to
/// exist, so a bad body on a missing listing still reports 404.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub message: String,
}

/// Public comment under a listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitCommentRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub message: String,
}

/// Follow or unfollow a listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FollowRequest {
    #[serde(default)]
    pub email: String,
}

/// Admin inbox filter: `?listingId=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxQuery {
    pub listing_id: Option<String>,
}

impl InboxQuery {
    pub fn listing_filter(&self) -> Option<&str> {
        self.listing_id.as_deref().filter(|id| !id.is_empty())
    }
}
