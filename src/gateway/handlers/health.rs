//! Health check handler

use axum::Json;

use super::super::types::HealthResponse;

/// Health check endpoint
///
/// Liveness only: never touches the database, so it answers `ok` even when
/// PostgreSQL is down.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service alive", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
