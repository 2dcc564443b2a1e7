//! Repository layer for database operations

pub mod projects;
pub mod tool_instances;
pub mod tools;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub tools: tools::ToolsRepository,
    pub projects: projects::ProjectsRepository,
    pub tool_instances: tool_instances::ToolInstancesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            tools: tools::ToolsRepository::new(pool.clone()),
            projects: projects::ProjectsRepository::new(pool.clone()),
            tool_instances: tool_instances::ToolInstancesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
