use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::types::{Palette, PaletteCreateInput, PaletteUpdateInput};
use swatchbook_storage::{StorageError, StorageResult};

/// Storage layer for palettes
pub struct PaletteStorage {
    pool: SqlitePool,
}

impl PaletteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all palettes ordered by id
    pub async fn list_palettes(&self) -> StorageResult<Vec<Palette>> {
        let palettes = sqlx::query_as::<_, Palette>("SELECT * FROM palettes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(palettes)
    }

    /// List palettes where any color field contains the given hex fragment,
    /// case-insensitively. The fragment is expected to be pre-validated.
    pub async fn search_palettes(&self, color_fragment: &str) -> StorageResult<Vec<Palette>> {
        let pattern = format!("%{}%", color_fragment.to_lowercase());

        let palettes = sqlx::query_as::<_, Palette>(
            "SELECT * FROM palettes \
             WHERE lower(color_one) LIKE ? \
                OR lower(color_two) LIKE ? \
                OR lower(color_three) LIKE ? \
                OR lower(color_four) LIKE ? \
                OR lower(color_five) LIKE ? \
             ORDER BY id",
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(palettes)
    }

    /// List the palettes belonging to a project
    pub async fn list_for_project(&self, projects_id: i64) -> StorageResult<Vec<Palette>> {
        let palettes = sqlx::query_as::<_, Palette>(
            "SELECT * FROM palettes WHERE projects_id = ? ORDER BY id",
        )
        .bind(projects_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(palettes)
    }

    /// Get a single palette by id
    pub async fn get_palette(&self, id: i64) -> StorageResult<Option<Palette>> {
        let palette = sqlx::query_as::<_, Palette>("SELECT * FROM palettes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(palette)
    }

    /// Insert a new palette and return its generated id
    pub async fn create_palette(&self, input: PaletteCreateInput) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO palettes (name, color_one, color_two, color_three, color_four, \
             color_five, projects_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.color_one)
        .bind(&input.color_two)
        .bind(&input.color_three)
        .bind(&input.color_four)
        .bind(&input.color_five)
        .bind(input.projects_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let id = result.last_insert_rowid();
        debug!("Created palette {} ({})", input.name, id);
        Ok(id)
    }

    /// Rename a palette. Returns false when no row matched the id.
    pub async fn update_palette(
        &self,
        id: i64,
        input: PaletteUpdateInput,
    ) -> StorageResult<bool> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE palettes SET name = ?, updated_at = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a palette. Returns false when no row matched the id.
    pub async fn delete_palette(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM palettes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every palette belonging to a project, returning the count removed
    pub async fn delete_for_project(&self, projects_id: i64) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM palettes WHERE projects_id = ?")
            .bind(projects_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }
}
