// ABOUTME: HTTP request handlers for palette operations
// ABOUTME: Handles palette CRUD and the color fragment filter

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::db::DbState;
use crate::response::{error_response, internal_error};
use crate::validation::{is_hex_fragment, parse_rename_body, COLOR_FILTER_MESSAGE};
use swatchbook_palettes::PaletteUpdateInput;

#[derive(Deserialize)]
pub struct ListPalettesQuery {
    pub color: Option<String>,
}

/// List all palettes, optionally filtered by a hex color fragment
pub async fn list_palettes(
    State(db): State<DbState>,
    Query(params): Query<ListPalettesQuery>,
) -> impl IntoResponse {
    let result = match params.color {
        Some(fragment) => {
            if !is_hex_fragment(&fragment) {
                return error_response(StatusCode::UNPROCESSABLE_ENTITY, COLOR_FILTER_MESSAGE);
            }
            info!("Listing palettes matching color fragment: {}", fragment);
            db.palette_storage.search_palettes(&fragment).await
        }
        None => {
            info!("Listing all palettes");
            db.palette_storage.list_palettes().await
        }
    };

    match result {
        Ok(palettes) => {
            (StatusCode::OK, ResponseJson(json!({ "palettes": palettes }))).into_response()
        }
        Err(e) => {
            error!("Failed to list palettes: {}", e);
            internal_error(e)
        }
    }
}

/// Get a specific palette by ID
pub async fn get_palette(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Getting palette with ID: {}", id);

    match db.palette_storage.get_palette(id).await {
        Ok(Some(palette)) => (StatusCode::OK, ResponseJson(palette)).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("Could not find palette with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to get palette {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Rename an existing palette
pub async fn update_palette(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let name = match parse_rename_body(&body) {
        Ok(name) => name,
        Err(message) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, message),
    };

    info!("Renaming palette {} to {}", id, name);

    match db
        .palette_storage
        .update_palette(id, PaletteUpdateInput { name })
        .await
    {
        Ok(true) => (StatusCode::OK, ResponseJson(json!({ "id": id }))).into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("Could not find palette with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to update palette {}: {}", id, e);
            internal_error(e)
        }
    }
}

/// Delete a palette
pub async fn delete_palette(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Deleting palette: {}", id);

    match db.palette_storage.delete_palette(id).await {
        Ok(true) => (
            StatusCode::OK,
            format!("Palette with id {id} has been removed successfully"),
        )
            .into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("Could not find palette with an id of {id}"),
        ),
        Err(e) => {
            error!("Failed to delete palette {}: {}", id, e);
            internal_error(e)
        }
    }
}
