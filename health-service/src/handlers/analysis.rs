//! The analysis endpoint.
//!
//! Every outcome is normalized into the uniform envelope the front end
//! expects; a failed analysis never crashes the process.

use crate::models::{AnalysisReport, HealthIntake};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Uniform response envelope for `POST /api/health-analysis`.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// `null` on failure.
    pub data: Option<AnalysisReport>,
}

#[tracing::instrument(skip_all)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(intake): Json<HealthIntake>,
) -> impl IntoResponse {
    match state.analysis.analyze(&intake).await {
        Ok(report) => (
            StatusCode::OK,
            Json(AnalysisResponse {
                success: true,
                error: None,
                data: Some(report),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Health analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalysisResponse {
                    success: false,
                    error: Some(err.to_string()),
                    data: None,
                }),
            )
        }
    }
}
