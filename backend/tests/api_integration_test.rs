//! Integration tests for the HTTP API
//!
//! These tests drive the full router with in-process requests and verify
//! the wire contract:
//! 1. User creation, listing and bulk deletion
//! 2. Exercise creation with validation and date defaults
//! 3. Log queries filtered by date range and limit

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use exercise_tracker_backend::api::router;
use exercise_tracker_backend::state::AppState;
use exercise_tracker_backend::tracker::{dates, TrackerDb};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper to build a router over a fresh database
async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("api.db");
    let db = TrackerDb::new(db_path.to_str().unwrap(), 2)
        .await
        .expect("Failed to create test database");
    (router(AppState::new(db)), temp_dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

async fn post_form(app: &Router, uri: &str, form: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    send(app, request).await
}

async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = post_json(app, "/api/users", json!({ "username": username })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], username);
    body["_id"].as_str().unwrap().to_string()
}

async fn log_exercise(app: &Router, user_id: &str, description: &str, date: &str) {
    let (status, _) = post_json(
        app,
        &format!("/api/users/{}/exercises", user_id),
        json!({ "description": description, "duration": 30, "date": date }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_then_list() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "alice").await;

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("users list should be an array");
    assert!(users
        .iter()
        .any(|u| u["username"] == "alice" && u["_id"] == id.as_str()));
}

#[tokio::test]
async fn test_create_user_from_form() {
    let (app, _temp_dir) = create_test_app().await;
    let (status, body) = post_form(&app, "/api/users", "username=bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "bob");
}

#[tokio::test]
async fn test_delete_all_users_leaves_empty_response() {
    let (app, _temp_dir) = create_test_app().await;
    create_user(&app, "alice").await;
    create_user(&app, "alice").await;

    let (status, body) = get(&app, "/api/users/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All users have been deleted!");
    assert_eq!(body["deleted"], 2);

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "There are no users in the database!");
}

#[tokio::test]
async fn test_exercise_for_unknown_user_is_not_found() {
    let (app, _temp_dir) = create_test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/users/does-not-exist/exercises",
        json!({ "description": "run", "duration": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("does-not-exist"));

    let (status, _) = get(&app, "/api/users/does-not-exist/logs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_exercise_without_date_defaults_to_today() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "runner").await;

    let before = dates::today_utc();
    let (status, body) = post_form(
        &app,
        &format!("/api/users/{}/exercises", id),
        "description=jog&duration=15",
    )
    .await;
    let after = dates::today_utc();

    assert_eq!(status, StatusCode::OK);
    let date = body["date"].as_str().unwrap();
    assert!(date == dates::to_display(before) || date == dates::to_display(after));
    assert_eq!(body["duration"], 15);
}

#[tokio::test]
async fn test_logs_filtered_by_date_range() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "lifter").await;
    log_exercise(&app, &id, "first", "2024-01-01").await;
    log_exercise(&app, &id, "second", "2024-01-15").await;
    log_exercise(&app, &id, "third", "2024-02-01").await;

    let (status, body) = get(
        &app,
        &format!("/api/users/{}/logs?from=2024-01-01&to=2024-01-31", id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], id.as_str());
    assert_eq!(body["username"], "lifter");
    assert_eq!(body["count"], 2);
    let log = body["log"].as_array().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0]["description"], "first");
    assert_eq!(log[1]["description"], "second");
}

#[tokio::test]
async fn test_logs_limit() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "lifter").await;
    log_exercise(&app, &id, "first", "2024-01-01").await;
    log_exercise(&app, &id, "second", "2024-01-15").await;
    log_exercise(&app, &id, "third", "2024-02-01").await;

    let (status, body) = get(&app, &format!("/api/users/{}/logs?limit=1", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["log"].as_array().unwrap().len(), 1);

    let (_, body) = get(&app, &format!("/api/users/{}/logs?limit=0", id)).await;
    assert_eq!(body["count"], 3);

    let (status, _) = get(&app, &format!("/api/users/{}/logs?limit=-2", id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_display_date_round_trip() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "walker").await;

    let (_, created) = post_json(
        &app,
        &format!("/api/users/{}/exercises", id),
        json!({ "description": "walk", "duration": 20, "date": "2024-03-05" }),
    )
    .await;
    assert_eq!(created["date"], "Tue Mar 05 2024");

    let (_, logs) = get(&app, &format!("/api/users/{}/logs", id)).await;
    assert_eq!(logs["log"][0]["date"], created["date"]);
}

#[tokio::test]
async fn test_duration_string_is_stored_as_integer() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "cyclist").await;

    let (status, body) = post_json(
        &app,
        &format!("/api/users/{}/exercises", id),
        json!({ "description": "ride", "duration": "45", "date": "2024-04-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 45);

    let (_, logs) = get(&app, &format!("/api/users/{}/logs", id)).await;
    assert_eq!(logs["log"][0]["duration"], 45);
}

#[tokio::test]
async fn test_non_numeric_duration_is_rejected() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "cyclist").await;

    let (status, body) = post_json(
        &app,
        &format!("/api/users/{}/exercises", id),
        json!({ "description": "ride", "duration": "forty", "date": "2024-04-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("duration"));

    let (_, logs) = get(&app, &format!("/api/users/{}/logs", id)).await;
    assert_eq!(logs["count"], 0);
}

#[tokio::test]
async fn test_delete_all_exercises() {
    let (app, _temp_dir) = create_test_app().await;
    let id = create_user(&app, "swimmer").await;
    log_exercise(&app, &id, "laps", "2024-01-01").await;

    let (status, body) = get(&app, "/api/exercises/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All exercises have been deleted!");

    let (_, logs) = get(&app, &format!("/api/users/{}/logs", id)).await;
    assert_eq!(logs["count"], 0);
}

#[tokio::test]
async fn test_landing_page() {
    let (app, _temp_dir) = create_test_app().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}
