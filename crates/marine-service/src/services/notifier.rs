//! New-message notification seam
//!
//! The service only knows that an owner should hear about a new message.
//! How (mail, chat hook, nothing) is up to the `Notifier` it is given.

use async_trait::async_trait;
use tracing::info;

use marine_core::{Listing, Message};

/// Notification delivery failure
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification transport failed: {0}")]
    Transport(String),
}

/// Delivers a notice about a freshly stored message
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_new_message(&self, listing: &Listing, message: &Message)
        -> Result<(), NotifyError>;
}

/// Writes the notification to the log instead of delivering it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_new_message(
        &self,
        listing: &Listing,
        message: &Message,
    ) -> Result<(), NotifyError> {
        info!(
            listing_id = %listing.id,
            listing_title = %listing.title,
            from = %message.name,
            email = %message.email,
            phone = message.has_phone().then_some(message.phone.as_str()),
            body = %message.message,
            sent_at = %message.created_at,
            "New message for listing"
        );
        Ok(())
    }
}
