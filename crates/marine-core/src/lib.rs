//! # marine-core
//!
//! Domain layer containing listings, engagement records, value objects, and the
//! document store port. This crate has no dependency on infrastructure (files,
//! HTTP, runtime).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    interest_score, CascadeSummary, Comment, Database, Follow, Listing, ListingStats, Message,
    DEFAULT_LISTING_STATUS, DEFAULT_MESSAGE_STATUS,
};
pub use error::DomainError;
pub use traits::{DocumentStore, RepoResult};
pub use value_objects::{RecordId, RecordKind, Segment};
