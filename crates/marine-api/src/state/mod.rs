//! Shared handler state
//!
//! Services, configuration and the access whitelist built once at startup.

use std::sync::Arc;

use marine_common::{AppConfig, Whitelist};
use marine_service::{ServiceContext, ServiceResult};

use crate::response::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    whitelist: Arc<Whitelist>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        let whitelist = Whitelist::from_config(&config.access);
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
            whitelist: Arc::new(whitelist),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Keys and addresses allowed past the admin gate
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Run a mutating service call on the blocking pool.
    ///
    /// Writes save the whole document to disk under the store lock, so they
    /// stay off the async workers.
    pub async fn run_blocking<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&ServiceContext) -> ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let services = Arc::clone(&self.services);
        let result = tokio::task::spawn_blocking(move || f(&services))
            .await
            .map_err(ApiError::internal)?;
        Ok(result?)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.services.store().location())
            .field("environment", &self.config.app.env)
            .finish_non_exhaustive()
    }
}
