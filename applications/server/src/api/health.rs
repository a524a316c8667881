/// Liveness and store readiness
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Jobs currently readable from the store, absent when the store failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_count: Option<usize>,
}

/// GET /api/health
///
/// 503 with status "degraded" when the job store cannot be read.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match app_state.jobs.list_all().await {
        Ok(jobs) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                job_count: Some(jobs.len()),
            }),
        ),
        Err(e) => {
            tracing::error!("Health check could not read the job store: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    job_count: None,
                }),
            )
        }
    }
}
