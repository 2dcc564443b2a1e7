//! Tool catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::tool::{CreateTool, Tool, UpdateTool},
};

use super::AuthenticatedUser;

/// List all tools
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tool list", body = Vec<Tool>)
    )
)]
pub async fn list_tools(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list().await?;
    Ok(Json(tools))
}

/// Get tool by ID
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = "tools",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tool ID")),
    responses(
        (status = 200, description = "Tool details", body = Tool),
        (status = 404, description = "Tool not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Tool>> {
    let tool = state.services.tools.get_by_id(id).await?;
    Ok(Json(tool))
}

/// Create a tool
#[utoipa::path(
    post,
    path = "/tools",
    tag = "tools",
    security(("bearer_auth" = [])),
    request_body = CreateTool,
    responses(
        (status = 201, description = "Tool created", body = Tool),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateTool>,
) -> AppResult<(StatusCode, Json<Tool>)> {
    let tool = state.services.tools.create(&data).await?;
    Ok((StatusCode::CREATED, Json(tool)))
}

/// Update a tool
#[utoipa::path(
    put,
    path = "/tools/{id}",
    tag = "tools",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tool ID")),
    request_body = UpdateTool,
    responses(
        (status = 200, description = "Tool updated", body = Tool),
        (status = 404, description = "Tool not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTool>,
) -> AppResult<Json<Tool>> {
    let tool = state.services.tools.update(id, &data).await?;
    Ok(Json(tool))
}

/// Delete a tool
#[utoipa::path(
    delete,
    path = "/tools/{id}",
    tag = "tools",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tool ID")),
    responses(
        (status = 204, description = "Tool deleted"),
        (status = 409, description = "Tool still assigned to a project", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_tool(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.tools.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
