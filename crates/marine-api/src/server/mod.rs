//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use marine_common::{AppConfig, AppError};
use marine_core::DocumentStore;
use marine_service::{LogNotifier, ServiceContextBuilder};
use marine_store::{Datastore, JsonFileStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Open the configured JSON document and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(path = %config.storage.data_file.display(), "Opening data file");
    let backend = Arc::new(JsonFileStore::new(config.storage.data_file.clone()));
    create_app_state_with(config, backend)
}

/// Create AppState over an arbitrary document backend
pub fn create_app_state_with(
    config: AppConfig,
    backend: Arc<dyn DocumentStore>,
) -> Result<AppState, AppError> {
    let store = Datastore::open(backend)?;

    let service_context = ServiceContextBuilder::new()
        .store(Arc::new(store))
        .notifier(Arc::new(LogNotifier))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
///
/// Connect info is attached so handlers can see the socket peer.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Server(e.to_string()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, &addr).await
}
