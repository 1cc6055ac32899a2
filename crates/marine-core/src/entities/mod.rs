//! Domain entities - core business objects

mod comment;
mod database;
mod follow;
mod lenient;
mod listing;
mod message;

pub use comment::Comment;
pub use database::{CascadeSummary, Database};
pub use follow::Follow;
pub use listing::{interest_score, Listing, ListingStats, DEFAULT_LISTING_STATUS};
pub use message::{Message, DEFAULT_MESSAGE_STATUS};
