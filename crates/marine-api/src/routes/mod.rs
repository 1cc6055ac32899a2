//! Route definitions
//!
//! All API routes mounted under /api, grouped by gate.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, health, keys, public};
use crate::middleware::{public_read_gate, public_write_gate, require_whitelist};
use crate::state::AppState;

/// Create the main API router with all routes
///
/// Gates are attached with `route_layer`, so unknown paths still fall
/// through to a plain 404.
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .route("/health", get(health::health_check))
            .nest(
                "/public",
                public_read_routes(state).merge(public_write_routes(state)),
            )
            .nest("/admin", admin_routes(state)),
    )
}

/// Catalogue browsing
fn public_read_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/listings", get(public::list_listings))
        .route("/listings/:id", get(public::get_listing))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            public_read_gate,
        ))
}

/// Anonymous engagement
fn public_write_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/listings/:id/messages", post(public::submit_message))
        .route("/listings/:id/comments", post(public::submit_comment))
        .route(
            "/listings/:id/follow",
            post(public::follow_listing).delete(public::unfollow_listing),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            public_write_gate,
        ))
}

/// Whitelisted management routes
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/keys", post(keys::create_key))
        .route(
            "/listings",
            get(admin::list_listings).post(admin::create_listing),
        )
        .route(
            "/listings/:id",
            get(admin::get_listing)
                .patch(admin::update_listing)
                .delete(admin::delete_listing),
        )
        .route("/messages", get(admin::list_messages))
        .route("/comments", get(admin::list_comments))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_whitelist,
        ))
}
