//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request.

pub mod context;
pub mod engagement;
pub mod error;
pub mod listing;
pub mod notifier;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use listing::ListingService;
pub use notifier::{LogNotifier, Notifier, NotifyError};
