//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assignments, auth, dashboard, health, projects, tools};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gudang API",
        version = "0.1.0",
        description = "Warehouse Tool Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        auth::logout,
        // Tools
        tools::list_tools,
        tools::get_tool,
        tools::create_tool,
        tools::update_tool,
        tools::delete_tool,
        // Projects
        projects::list_projects,
        projects::get_project,
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        // Assignments
        assignments::list_project_tools,
        assignments::assign_tool,
        assignments::unassign_tool,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Tools
            crate::models::tool::Tool,
            crate::models::tool::ToolCondition,
            crate::models::tool::CreateTool,
            crate::models::tool::UpdateTool,
            // Projects
            crate::models::project::Project,
            crate::models::project::CreateProject,
            crate::models::project::UpdateProject,
            // Assignments
            crate::models::tool_instance::ToolInstance,
            crate::models::tool_instance::ToolInstanceDetails,
            crate::models::tool_instance::CreateAssignment,
            // Dashboard
            dashboard::DashboardResponse,
            dashboard::ProjectStats,
            dashboard::ToolStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "tools", description = "Tool catalog management"),
        (name = "projects", description = "Project catalog management"),
        (name = "assignments", description = "Tool assignment ledger"),
        (name = "dashboard", description = "Dashboard aggregates")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
