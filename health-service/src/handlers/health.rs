//! Liveness and readiness probes.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "health-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint. The service has no external startup
/// dependencies, so serving at all means ready.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
