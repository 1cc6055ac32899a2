//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Loosely typed field wrappers shared by the listing requests
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod fields;
pub mod mappers;
pub mod requests;
pub mod responses;

pub use fields::{TextList, YearInput};

pub use requests::{
    CreateListingRequest, FollowRequest, InboxQuery, ListingQuery, ListingSort,
    SubmitCommentRequest, SubmitMessageRequest, UpdateListingRequest,
};

pub use responses::{
    CommentEnvelope, CommentResponse, DeletedResponse, FollowResponse, HealthResponse,
    InboxComment, InboxCommentsResponse, InboxMessage, InboxMessagesResponse,
    ListingDetailResponse, ListingEnvelope, ListingResponse, ListingsResponse, MessageAccepted,
    UnfollowResponse, DELETED_LISTING_TITLE,
};
