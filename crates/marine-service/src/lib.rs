//! # marine-service
//!
//! Application layer containing the listing and engagement use cases, their
//! DTOs, and the new-message notification seam.

pub mod dto;
pub mod services;

pub use services::{
    EngagementService, ListingService, LogNotifier, Notifier, NotifyError, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
