//! Business logic services

pub mod assignments;
pub mod auth;
pub mod dashboard;
pub mod projects;
pub mod tools;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub tools: tools::ToolsService,
    pub projects: projects::ProjectsService,
    pub assignments: assignments::AssignmentsService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            tools: tools::ToolsService::new(repository.clone()),
            projects: projects::ProjectsService::new(repository.clone()),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
