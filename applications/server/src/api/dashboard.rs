/// Dashboard API routes
use crate::{api::ApiResponse, error::Result, services::compute_stats, state::AppState};
use axum::{extract::State, Json};
use staffboard_core::DashboardStats;

/// GET /api/dashboard/stats
pub async fn stats(State(app_state): State<AppState>) -> Result<Json<ApiResponse<DashboardStats>>> {
    let stats = compute_stats(app_state.jobs.as_ref()).await?;
    Ok(ApiResponse::ok(stats))
}
