// ABOUTME: Seed and reset helpers used by the test harness
// ABOUTME: The serving path never calls into this module

use sqlx::SqlitePool;
use tracing::debug;

use swatchbook_palettes::{PaletteCreateInput, PaletteStorage};
use swatchbook_projects::{ProjectCreateInput, ProjectStorage};
use swatchbook_storage::{StorageError, StorageResult};

/// Remove every palette and project
pub async fn reset_database(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::query("DELETE FROM palettes")
        .execute(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("DELETE FROM projects")
        .execute(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    debug!("Database reset");
    Ok(())
}

/// Reset the database and insert a known fixture set: two projects, the
/// first owning two palettes and the second owning one.
pub async fn seed_database(pool: &SqlitePool) -> StorageResult<()> {
    reset_database(pool).await?;

    let projects = ProjectStorage::new(pool.clone());
    let palettes = PaletteStorage::new(pool.clone());

    let warm = projects
        .create_project(ProjectCreateInput {
            name: "Warm Tones".to_string(),
        })
        .await?;

    let cool = projects
        .create_project(ProjectCreateInput {
            name: "Cool Tones".to_string(),
        })
        .await?;

    palettes
        .create_palette(PaletteCreateInput {
            name: "Sunset".to_string(),
            color_one: "#FF6B35".to_string(),
            color_two: "#F7C59F".to_string(),
            color_three: "#EFEFD0".to_string(),
            color_four: "#704C5E".to_string(),
            color_five: "#2E1F27".to_string(),
            projects_id: warm,
        })
        .await?;

    palettes
        .create_palette(PaletteCreateInput {
            name: "Autumn".to_string(),
            color_one: "#8D5524".to_string(),
            color_two: "#C68642".to_string(),
            color_three: "#E0AC69".to_string(),
            color_four: "#F1C27D".to_string(),
            color_five: "#FFDBAC".to_string(),
            projects_id: warm,
        })
        .await?;

    palettes
        .create_palette(PaletteCreateInput {
            name: "Ocean".to_string(),
            color_one: "#05668D".to_string(),
            color_two: "#028090".to_string(),
            color_three: "#00A896".to_string(),
            color_four: "#02C39A".to_string(),
            color_five: "#F0F3BD".to_string(),
            projects_id: cool,
        })
        .await?;

    debug!("Database seeded");
    Ok(())
}
