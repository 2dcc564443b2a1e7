//! Projects repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::project::{CreateProject, Project, UpdateProject},
};

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct ProjectsRepository {
    pool: Pool<Postgres>,
}

impl ProjectsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all projects
    pub async fn list(&self) -> AppResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY nama_proyek")
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    /// Get project by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Project> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", id)))
    }

    /// Create a new project. New projects always start not-done.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (nama_proyek, kode_proyek, tanggal_mulai, tanggal_selesai,
                                  is_done, valuasi)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING *
            "#,
        )
        .bind(&data.nama_proyek)
        .bind(&data.kode_proyek)
        .bind(&data.tanggal_mulai)
        .bind(&data.tanggal_selesai)
        .bind(&data.valuasi)
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }

    /// Update a project
    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET nama_proyek = $1, kode_proyek = $2, tanggal_mulai = $3,
                tanggal_selesai = $4, is_done = $5, valuasi = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.nama_proyek)
        .bind(&data.kode_proyek)
        .bind(&data.tanggal_mulai)
        .bind(&data.tanggal_selesai)
        .bind(data.is_done)
        .bind(&data.valuasi)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", id)))
    }

    /// Delete a project. Blocked while tools are still assigned to it
    /// (foreign key on tool_instances).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(r) if r.rows_affected() == 0 => {
                Err(AppError::NotFound(format!("Project with id {} not found", id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(AppError::Conflict(format!(
                    "Project {} still has tools assigned",
                    id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Count all projects and the completed subset
    pub async fn count_with_done(&self) -> AppResult<(i64, i64)> {
        let row: (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_done) FROM projects",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
