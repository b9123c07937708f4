//! Liveness check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /` — liveness check, no side effects.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
