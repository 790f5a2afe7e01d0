//! Health check, static files, fallback and CORS

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_error, spawn_app};

#[tokio::test]
async fn test_health() {
    let app = spawn_app();
    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "message": "Healthy" }));
}

#[tokio::test]
async fn test_static_files_are_cached_for_a_day() {
    let app = spawn_app();
    std::fs::write(app.static_dir.path().join("hello.txt"), "hello from disk").unwrap();

    let response = app.server.get("/static/hello.txt").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "hello from disk");
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL),
        Some(&HeaderValue::from_static("public, max-age=86400"))
    );
}

#[tokio::test]
async fn test_missing_static_file_is_404() {
    let app = spawn_app();
    let response = app.server.get("/static/missing.css").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = spawn_app();
    let response = app.server.get("/definitely/not/here").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = spawn_app();
    let response = app
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}
