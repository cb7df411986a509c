// ABOUTME: HTTP API layer for Swatchbook providing REST endpoints and routing
// ABOUTME: Integration layer over the projects and palettes storage packages

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub mod db;
pub mod palettes_handlers;
pub mod projects_handlers;
pub mod response;
pub mod seed;
pub mod validation;

pub use db::DbState;

/// Creates the projects API router
pub fn create_projects_router() -> Router<DbState> {
    Router::new()
        .route("/", get(projects_handlers::list_projects))
        .route("/", post(projects_handlers::create_project))
        .route("/{id}", get(projects_handlers::get_project))
        .route("/{id}", patch(projects_handlers::update_project))
        .route("/{id}", delete(projects_handlers::delete_project))
        .route("/{id}/palettes", get(projects_handlers::list_project_palettes))
        .route("/{id}/palettes", post(projects_handlers::create_project_palette))
}

/// Creates the palettes API router
pub fn create_palettes_router() -> Router<DbState> {
    Router::new()
        .route("/", get(palettes_handlers::list_palettes))
        .route("/{id}", get(palettes_handlers::get_palette))
        .route("/{id}", patch(palettes_handlers::update_palette))
        .route("/{id}", delete(palettes_handlers::delete_palette))
}

/// Assembles the application router over shared database state
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .nest("/projects", create_projects_router())
        .nest("/palettes", create_palettes_router())
        .with_state(db)
}
