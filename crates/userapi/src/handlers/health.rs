//! Health check endpoint.

use axum::Json;

use userapi_core::health::HealthStatus;

/// GET /api/health - Liveness check.
///
/// Always reports healthy; the database is not consulted.
#[axum::debug_handler]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
