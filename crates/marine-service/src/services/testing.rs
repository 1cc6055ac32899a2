//! Shared fixtures for service unit tests

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use marine_core::{Listing, Message};
use marine_store::{Datastore, MemoryStore};

use super::notifier::{Notifier, NotifyError};
use super::ServiceContext;
use crate::dto::CreateListingRequest;
use crate::services::ListingService;

/// Forwards every notification to a channel
pub struct ChannelNotifier(pub mpsc::UnboundedSender<(String, String)>);

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify_new_message(
        &self,
        listing: &Listing,
        message: &Message,
    ) -> Result<(), NotifyError> {
        let _ = self.0.send((listing.title.clone(), message.id.to_string()));
        Ok(())
    }
}

/// Always fails, after recording that it was called
#[derive(Default)]
pub struct FailingNotifier(pub Mutex<usize>);

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_new_message(&self, _: &Listing, _: &Message) -> Result<(), NotifyError> {
        *self.0.lock() += 1;
        Err(NotifyError::Transport("smtp unreachable".to_string()))
    }
}

pub fn context_with(notifier: Arc<dyn Notifier>) -> (ServiceContext, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let store = Datastore::open(backend.clone()).unwrap();
    let ctx = ServiceContext::builder()
        .store(Arc::new(store))
        .notifier(notifier)
        .build()
        .unwrap();
    (ctx, backend)
}

pub fn context() -> (ServiceContext, Arc<MemoryStore>) {
    context_with(Arc::new(super::LogNotifier))
}

/// Create a listing with only a title and return its id
pub fn seed_listing(ctx: &ServiceContext, title: &str) -> String {
    ListingService::new(ctx)
        .create(CreateListingRequest {
            title: title.to_string(),
            ..CreateListingRequest::default()
        })
        .unwrap()
        .id
}
