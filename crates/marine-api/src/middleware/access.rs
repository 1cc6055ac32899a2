//! Access gates
//!
//! Admin routes always require a whitelisted caller. Public routes are open
//! by default; each group can be closed to non-whitelisted callers through
//! configuration.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use marine_common::AppError;
use tracing::warn;

use crate::extractors::credentials;
use crate::response::ApiError;
use crate::state::AppState;

fn is_whitelisted(state: &AppState, request: &Request) -> bool {
    let creds = credentials(
        request.headers(),
        request.extensions(),
        state.config().access.trust_proxy,
    );
    state.whitelist().is_whitelisted(&creds)
}

fn reject(request: &Request, gate: &'static str) -> Response {
    warn!(
        gate,
        method = %request.method(),
        uri = %request.uri(),
        "Rejected request that is not whitelisted"
    );
    ApiError::App(AppError::Forbidden).into_response()
}

/// Admin gate
pub async fn require_whitelist(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !is_whitelisted(&state, &request) {
        return reject(&request, "admin");
    }
    next.run(request).await
}

/// Public read gate, closed when public reads are disabled
pub async fn public_read_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config().access.allow_public_read && !is_whitelisted(&state, &request) {
        return reject(&request, "public_read");
    }
    next.run(request).await
}

/// Public write gate, closed when public writes require the whitelist
pub async fn public_write_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.config().access.public_write_requires_whitelist && !is_whitelisted(&state, &request) {
        return reject(&request, "public_write");
    }
    next.run(request).await
}
