use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::types::{Project, ProjectCreateInput, ProjectUpdateInput};
use swatchbook_storage::{StorageError, StorageResult};

/// Storage layer for projects
pub struct ProjectStorage {
    pool: SqlitePool,
}

impl ProjectStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all projects ordered by id
    pub async fn list_projects(&self) -> StorageResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, created_at, updated_at FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(projects)
    }

    /// Get a single project by id
    pub async fn get_project(&self, id: i64) -> StorageResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, created_at, updated_at FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(project)
    }

    /// Insert a new project and return its generated id
    pub async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO projects (name, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let id = result.last_insert_rowid();
        debug!("Created project {} ({})", input.name, id);
        Ok(id)
    }

    /// Rename a project. Returns false when no row matched the id.
    pub async fn update_project(
        &self,
        id: i64,
        input: ProjectUpdateInput,
    ) -> StorageResult<bool> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE projects SET name = ?, updated_at = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a project. Returns false when no row matched the id.
    pub async fn delete_project(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
