// ABOUTME: Palette type definitions
// ABOUTME: Structures for named groups of five colors belonging to a project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named group of five color values belonging to a project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Palette {
    pub id: i64,
    pub name: String,
    pub color_one: String,
    pub color_two: String,
    pub color_three: String,
    pub color_four: String,
    pub color_five: String,
    pub projects_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteCreateInput {
    pub name: String,
    pub color_one: String,
    pub color_two: String,
    pub color_three: String,
    pub color_four: String,
    pub color_five: String,
    pub projects_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteUpdateInput {
    pub name: String,
}
