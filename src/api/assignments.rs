//! Assignment ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::tool_instance::{CreateAssignment, ToolInstance, ToolInstanceDetails},
};

use super::AuthenticatedUser;

/// List tools assigned to a project, with the related tool embedded
#[utoipa::path(
    get,
    path = "/projects/{id}/tools",
    tag = "assignments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Assigned tools", body = Vec<ToolInstanceDetails>),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_project_tools(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ToolInstanceDetails>>> {
    let instances = state.services.assignments.list_for_project(id).await?;
    Ok(Json(instances))
}

/// Check out one unit of a tool to a project
#[utoipa::path(
    post,
    path = "/assignments",
    tag = "assignments",
    security(("bearer_auth" = [])),
    request_body = CreateAssignment,
    responses(
        (status = 201, description = "Tool assigned", body = ToolInstance),
        (status = 404, description = "Project or tool not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<ToolInstance>)> {
    let instance = state.services.assignments.assign(&data).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// Return one unit of a tool from a project
#[utoipa::path(
    delete,
    path = "/assignments/{id}",
    tag = "assignments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tool instance ID")),
    responses(
        (status = 204, description = "Tool returned"),
        (status = 404, description = "Tool instance not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn unassign_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.assignments.unassign(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
