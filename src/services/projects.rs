//! Project catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::project::{CreateProject, Project, UpdateProject},
    repository::Repository,
};

#[derive(Clone)]
pub struct ProjectsService {
    repository: Repository,
}

impl ProjectsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.repository.projects.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Project> {
        self.repository.projects.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.projects.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Project> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.projects.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.projects.delete(id).await
    }
}
