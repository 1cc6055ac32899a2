//! Service context - dependency container for services
//!
//! Holds the datastore and the notifier shared by every service.

use std::sync::Arc;

use marine_store::Datastore;

use super::error::{ServiceError, ServiceResult};
use super::notifier::{LogNotifier, Notifier};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<Datastore>,
    notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    pub fn new(store: Arc<Datastore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the datastore
    pub fn store(&self) -> &Datastore {
        self.store.as_ref()
    }

    /// Shared handle to the notifier, for detached tasks
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &self.store)
            .field("notifier", &"dyn Notifier")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<Datastore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<Datastore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// The notifier defaults to [`LogNotifier`].
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if the store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let store = self
            .store
            .ok_or(ServiceError::MissingDependency("store"))?;
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));
        Ok(ServiceContext::new(store, notifier))
    }
}
