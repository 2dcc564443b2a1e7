//! Project catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::project::{CreateProject, Project, UpdateProject},
};

use super::AuthenticatedUser;

/// List all projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project list", body = Vec<Project>)
    )
)]
pub async fn list_projects(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects.list().await?;
    Ok(Json(projects))
}

/// Get project by ID
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_project(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects.get_by_id(id).await?;
    Ok(Json(project))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.services.projects.create(&data).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects.update(id, &data).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 409, description = "Project still has tools assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
