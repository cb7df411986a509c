// ABOUTME: HTTP request handlers for project operations
// ABOUTME: Handles CRUD for projects and the nested palette routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::db::DbState;
use crate::response::{error_response, internal_error};
use crate::validation::{parse_palette_body, parse_project_body, parse_rename_body};
use swatchbook_projects::{ProjectCreateInput, ProjectUpdateInput};

/// List all projects
pub async fn list_projects(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing all projects");

    match db.project_storage.list_projects().await {
        Ok(projects) => {
            (StatusCode::OK, ResponseJson(json!({ "projects": projects }))).into_response()
        }
        Err(e) => {
            error!("Failed to list projects: {}", e);
            internal_error(e)
        }
    }
}

/// Get a specific project by ID
pub async fn get_project(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Getting project with ID: {}", id);

    match db.project_storage.get_project(id).await {
        Ok(Some(project)) => (StatusCode::OK, ResponseJson(project)).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("No project found with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to get project {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// List the palettes belonging to a project
pub async fn list_project_palettes(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("Listing palettes for project: {}", id);

    match db.palette_storage.list_for_project(id).await {
        Ok(palettes) if palettes.is_empty() => error_response(
            StatusCode::NOT_FOUND,
            format!("No palettes could be found matching a project with an id of {id}"),
        ),
        Ok(palettes) => {
            (StatusCode::OK, ResponseJson(json!({ "palettes": palettes }))).into_response()
        }
        Err(e) => {
            error!("Failed to list palettes for project {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Create a new project
pub async fn create_project(
    State(db): State<DbState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let name = match parse_project_body(&body) {
        Ok(name) => name,
        Err(message) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, message),
    };

    info!("Creating project: {}", name);

    match db
        .project_storage
        .create_project(ProjectCreateInput { name })
        .await
    {
        Ok(id) => (StatusCode::CREATED, ResponseJson(json!({ "id": id }))).into_response(),
        Err(e) => {
            error!("Failed to create project: {}", e);
            internal_error(e)
        }
    }
}

/// Create a palette under a project. The path parameter supplies projects_id.
pub async fn create_project_palette(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let input = match parse_palette_body(body, id) {
        Ok(input) => input,
        Err(message) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, message),
    };

    info!("Creating palette {} for project {}", input.name, id);

    match db.palette_storage.create_palette(input).await {
        Ok(palette_id) => {
            (StatusCode::CREATED, ResponseJson(json!({ "id": palette_id }))).into_response()
        }
        Err(e) => {
            error!("Failed to create palette for project {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Rename an existing project
pub async fn update_project(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let name = match parse_rename_body(&body) {
        Ok(name) => name,
        Err(message) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, message),
    };

    info!("Renaming project {} to {}", id, name);

    match db
        .project_storage
        .update_project(id, ProjectUpdateInput { name })
        .await
    {
        Ok(true) => (StatusCode::OK, ResponseJson(json!({ "id": id }))).into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("No project found with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to update project {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Delete a project and the palettes belonging to it
pub async fn delete_project(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Deleting project: {}", id);

    // Remove dependent palettes first; for a missing project this is a no-op
    if let Err(e) = db.palette_storage.delete_for_project(id).await {
        error!("Failed to delete palettes for project {}: {}", id, e);
        return internal_error(e);
    }

    match db.project_storage.delete_project(id).await {
        Ok(true) => (
            StatusCode::OK,
            format!("Project with id {id} has been removed successfully"),
        )
            .into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("Could not find project with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to delete project {}: {}", id, e);
            internal_error(e)
        }
    }
}
