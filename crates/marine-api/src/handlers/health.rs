//! Health check handler

use axum::Json;
use marine_service::dto::HealthResponse;

/// Basic health check (liveness probe)
///
/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
