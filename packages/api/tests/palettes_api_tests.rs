// ABOUTME: Router-level tests for the palettes endpoints
// ABOUTME: Covers the color fragment filter and the status-code contract

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use swatchbook_api::{seed, DbState};

async fn seeded_app() -> (Router, DbState) {
    let db = DbState::init_in_memory().await.unwrap();
    seed::seed_database(&db.pool).await.unwrap();
    (swatchbook_api::create_router(db.clone()), db)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_all_palettes() {
    let (app, _db) = seeded_app().await;

    let response = app.oneshot(get("/palettes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["palettes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_color_filter_matches_fragment() {
    let (app, _db) = seeded_app().await;

    let response = app.oneshot(get("/palettes?color=FF6B35")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let palettes = body["palettes"].as_array().unwrap();
    assert_eq!(palettes.len(), 1);
    assert_eq!(palettes[0]["name"], json!("Sunset"));
}

#[tokio::test]
async fn test_color_filter_is_case_insensitive() {
    let (app, _db) = seeded_app().await;

    let response = app.oneshot(get("/palettes?color=ff6b35")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["palettes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_color_filter_without_match_returns_empty_list() {
    let (app, _db) = seeded_app().await;

    let response = app.oneshot(get("/palettes?color=ABCDEF")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "palettes": [] }));
}

#[tokio::test]
async fn test_color_filter_rejects_malformed_fragment() {
    let (app, _db) = seeded_app().await;

    // Five characters, not six
    let response = app.clone().oneshot(get("/palettes?color=EEEEE")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        json!("Color must be a 6 character hex code without the leading #")
    );

    // Six characters, but not hex
    let response = app.oneshot(get("/palettes?color=GGGGGG")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_palette() {
    let (app, _db) = seeded_app().await;

    let response = app.clone().oneshot(get("/palettes")).await.unwrap();
    let body = body_json(response).await;
    let id = body["palettes"][0]["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/palettes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let palette = body_json(response).await;
    assert_eq!(palette["id"], json!(id));
    assert_eq!(palette["name"], json!("Sunset"));
}

#[tokio::test]
async fn test_get_missing_palette() {
    let (app, _db) = seeded_app().await;

    let response = app.oneshot(get("/palettes/12000")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        json!("Could not find palette with an id of 12000")
    );
}

#[tokio::test]
async fn test_rename_palette() {
    let (app, _db) = seeded_app().await;

    let response = app.clone().oneshot(get("/palettes")).await.unwrap();
    let body = body_json(response).await;
    let id = body["palettes"][0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/palettes/{id}"),
            &json!({ "name": "Dusk" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "id": id }));

    let response = app.oneshot(get(&format!("/palettes/{id}"))).await.unwrap();
    let palette = body_json(response).await;
    assert_eq!(palette["name"], json!("Dusk"));
    // Colors are untouched by a rename
    assert_eq!(palette["color_one"], json!("#FF6B35"));
}

#[tokio::test]
async fn test_rename_palette_rejects_extra_property() {
    let (app, _db) = seeded_app().await;

    let response = app.clone().oneshot(get("/palettes")).await.unwrap();
    let body = body_json(response).await;
    let id = body["palettes"][0]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/palettes/{id}"),
            &json!({ "name": "Dusk", "color_one": "#000000" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        json!("Expected body format {name: <String>}. color_one is not a valid property")
    );
}

#[tokio::test]
async fn test_rename_missing_palette() {
    let (app, _db) = seeded_app().await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/palettes/12000",
            &json!({ "name": "Nobody" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_palette_flow() {
    let (app, _db) = seeded_app().await;

    let response = app.clone().oneshot(get("/palettes")).await.unwrap();
    let body = body_json(response).await;
    let id = body["palettes"][0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/palettes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        format!("Palette with id {id} has been removed successfully")
    );

    let response = app.clone().oneshot(get(&format!("/palettes/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/palettes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_palette() {
    let (app, _db) = seeded_app().await;

    let response = app
        .oneshot(empty_request("DELETE", "/palettes/-4"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        json!("Could not find palette with an id of -4")
    );
}

#[tokio::test]
async fn test_reset_database_clears_everything() {
    let (app, db) = seeded_app().await;

    seed::reset_database(&db.pool).await.unwrap();

    let response = app.clone().oneshot(get("/palettes")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body, json!({ "palettes": [] }));

    let response = app.oneshot(get("/projects")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body, json!({ "projects": [] }));
}
