//! Dashboard endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Dashboard aggregates
#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub projects: ProjectStats,
    pub tools: ToolStats,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectStats {
    /// Total number of projects
    pub total: i64,
    /// Projects marked done
    pub done: i64,
    /// done / total, in [0, 1], for the progress indicator
    pub completion_ratio: f64,
}

#[derive(Serialize, ToSchema)]
pub struct ToolStats {
    /// Total number of tool definitions
    pub total: i64,
    /// Sum of initial quantities across all tools
    pub jumlah_awal: i64,
    /// Sum of available quantities
    pub jumlah_sekarang: i64,
    /// Sum of in-use quantities
    pub jumlah_terpakai: i64,
    /// jumlah_terpakai / jumlah_awal, in [0, 1], for the progress indicator
    pub usage_ratio: f64,
}

/// Get dashboard aggregates
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<DashboardResponse>> {
    let dashboard = state.services.dashboard.get_dashboard().await?;
    Ok(Json(dashboard))
}
