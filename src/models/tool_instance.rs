//! Tool instance model: one unit of a tool checked out to a project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::tool::Tool;

/// One unit of a tool checked out to a project.
///
/// The existence of a row means exactly one unit of the tool is in use by
/// the project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ToolInstance {
    pub id: i32,
    pub project_id: i32,
    pub tool_id: i32,
    pub created_at: Option<DateTime<Utc>>,
}

/// Tool instance with the related tool embedded, for project detail views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToolInstanceDetails {
    pub id: i32,
    pub project_id: i32,
    pub tool: Tool,
}

/// Assign tool request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssignment {
    pub project_id: i32,
    pub tool_id: i32,
}
