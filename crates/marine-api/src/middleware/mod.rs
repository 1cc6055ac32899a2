//! Middleware stack for the API server
//!
//! Provides request IDs, tracing, panic recovery, timeouts, CORS, the body
//! size limit, and the access gates.

mod access;

use std::any::Any as PanicPayload;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, Request, Response, StatusCode},
    Json, Router,
};
use marine_common::{AppConfig, CorsConfig, ErrorResponse};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::extractors::API_KEY_HEADER;
use crate::state::AppState;

pub use access::{public_read_gate, public_write_gate, require_whitelist};

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Largest accepted JSON body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply middleware stack to the router
pub fn apply_middleware(router: Router<AppState>, config: &AppConfig) -> Router<AppState> {
    // Layers wrap in reverse: the last one added sees the request first.
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(create_cors_layer(&config.cors, config.app.env.is_development()))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Turn a handler panic into a JSON 500
fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response<Body> {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    let body = ErrorResponse::new("An unexpected error occurred", "INTERNAL_ERROR");
    let mut response = axum::response::IntoResponse::into_response(Json(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

/// CORS for the admin and public frontends
fn create_cors_layer(config: &CorsConfig, is_development: bool) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(API_KEY_HEADER),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_origin(allowed_origins(config, is_development))
}

/// Any origin in development without a configured list; otherwise only the
/// configured origins, which may be none.
fn allowed_origins(config: &CorsConfig, is_development: bool) -> AllowOrigin {
    if config.allowed_origins.is_empty() && is_development {
        tracing::warn!("CORS: allowing any origin, set CORS_ALLOWED_ORIGINS to restrict");
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS: no usable origins configured, cross-origin requests are blocked");
    } else {
        tracing::info!(count = origins.len(), "CORS: allowing configured origins");
    }
    AllowOrigin::list(origins)
}
