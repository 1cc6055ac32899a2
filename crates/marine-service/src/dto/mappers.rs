//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use marine_core::{Comment, Listing, Message};

use super::responses::{
    CommentResponse, InboxComment, InboxMessage, ListingResponse, DELETED_LISTING_TITLE,
};

// ============================================================================
// Listing Mappers
// ============================================================================

impl From<&Listing> for ListingResponse {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            title: listing.title.clone(),
            segment: listing.segment,
            location: listing.location.clone(),
            year: listing.year,
            status: listing.status.clone(),
            cover_image: listing.cover_image.clone(),
            video_url: listing.video_url.clone(),
            highlights: listing.highlights.clone(),
            gallery: listing.gallery.clone(),
            description: listing.description.clone(),
            stats: listing.stats,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            interest_score: listing.interest_score(),
        }
    }
}

// ============================================================================
// Engagement Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            listing_id: comment.listing_id.to_string(),
            name: comment.name.clone(),
            message: comment.message.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl InboxMessage {
    /// Join a message with its listing title, if the listing still exists
    pub fn joined(message: &Message, listing_title: Option<&str>) -> Self {
        Self {
            id: message.id.to_string(),
            listing_id: message.listing_id.to_string(),
            name: message.name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            message: message.message.clone(),
            created_at: message.created_at,
            ip: message.ip.clone(),
            status: message.status.clone(),
            listing_title: listing_title.unwrap_or(DELETED_LISTING_TITLE).to_string(),
        }
    }
}

impl InboxComment {
    /// Join a comment with its listing title, if the listing still exists
    pub fn joined(comment: &Comment, listing_title: Option<&str>) -> Self {
        Self {
            id: comment.id.to_string(),
            listing_id: comment.listing_id.to_string(),
            name: comment.name.clone(),
            message: comment.message.clone(),
            created_at: comment.created_at,
            listing_title: listing_title.unwrap_or(DELETED_LISTING_TITLE).to_string(),
        }
    }
}
