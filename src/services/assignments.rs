//! Assignment ledger service

use crate::{
    error::AppResult,
    models::tool_instance::{CreateAssignment, ToolInstance, ToolInstanceDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a project's assigned tools
    pub async fn list_for_project(&self, project_id: i32) -> AppResult<Vec<ToolInstanceDetails>> {
        // Verify project exists
        self.repository.projects.get_by_id(project_id).await?;
        self.repository.tool_instances.list_for_project(project_id).await
    }

    /// Check out one unit of a tool to a project
    pub async fn assign(&self, data: &CreateAssignment) -> AppResult<ToolInstance> {
        // Verify both ends exist so a bad id reads as not-found rather than
        // a foreign key violation
        self.repository.projects.get_by_id(data.project_id).await?;
        self.repository.tools.get_by_id(data.tool_id).await?;
        self.repository.tool_instances.assign(data).await
    }

    /// Return one unit of a tool from a project
    pub async fn unassign(&self, id: i32) -> AppResult<()> {
        self.repository.tool_instances.unassign(id).await
    }
}
