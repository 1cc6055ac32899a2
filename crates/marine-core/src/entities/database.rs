//! Database document - the four record collections held in one JSON document

use serde::{Deserialize, Serialize};

use super::{lenient, Comment, Follow, Listing, Message};
use crate::value_objects::RecordId;

/// Whole persisted document
///
/// Missing or non-array collections load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, deserialize_with = "lenient::collection")]
    pub listings: Vec<Listing>,
    #[serde(default, deserialize_with = "lenient::collection")]
    pub messages: Vec<Message>,
    #[serde(default, deserialize_with = "lenient::collection")]
    pub comments: Vec<Comment>,
    #[serde(default, deserialize_with = "lenient::collection")]
    pub follows: Vec<Follow>,
}

/// Record counts removed by a cascading listing delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeSummary {
    pub messages: usize,
    pub comments: usize,
    pub follows: usize,
}

impl Database {
    pub fn find_listing(&self, id: &RecordId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn find_listing_mut(&mut self, id: &RecordId) -> Option<&mut Listing> {
        self.listings.iter_mut().find(|listing| &listing.id == id)
    }

    /// Title lookup used when joining engagement records with their listing
    pub fn listing_title(&self, id: &RecordId) -> Option<&str> {
        self.find_listing(id).map(|listing| listing.title.as_str())
    }

    pub fn find_follow(&self, listing_id: &RecordId, normalized_email: &str) -> Option<usize> {
        self.follows
            .iter()
            .position(|follow| follow.matches(listing_id, normalized_email))
    }

    /// Remove a listing together with every message, comment and follow
    /// that references it.
    pub fn remove_listing_cascade(&mut self, id: &RecordId) -> Option<(Listing, CascadeSummary)> {
        let index = self.listings.iter().position(|listing| &listing.id == id)?;
        let removed = self.listings.remove(index);

        let before = (self.messages.len(), self.comments.len(), self.follows.len());
        self.messages.retain(|item| &item.listing_id != id);
        self.comments.retain(|item| &item.listing_id != id);
        self.follows.retain(|item| &item.listing_id != id);

        let summary = CascadeSummary {
            messages: before.0 - self.messages.len(),
            comments: before.1 - self.comments.len(),
            follows: before.2 - self.follows.len(),
        };
        Some((removed, summary))
    }
}
