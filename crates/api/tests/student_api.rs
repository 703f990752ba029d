//! Integration tests for the student enrollment endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, embedding_with, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_student(app: Router, name: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/v1/students",
        json!({ "full_name": name, "cohort": "CS-2026" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_student_returns_created_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let student = create_student(app, "Ada Lovelace").await;

    assert_eq!(student["full_name"], "Ada Lovelace");
    assert_eq!(student["cohort"], "CS-2026");
    assert_eq!(student["has_embedding"], false);
    assert!(student["id"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_student_rejects_empty_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/students",
        json!({ "full_name": "   ", "cohort": "CS-2026" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/students/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_students_returns_roster(pool: PgPool) {
    create_student(common::build_test_app(pool.clone()), "Bob").await;
    create_student(common::build_test_app(pool.clone()), "Alice").await;

    let response = get(common::build_test_app(pool), "/api/v1/students").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let roster = json["data"].as_array().unwrap();
    assert_eq!(roster.len(), 2);
    // Ordered by name.
    assert_eq!(roster[0]["full_name"], "Alice");
    assert_eq!(roster[1]["full_name"], "Bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_student_patches_fields(pool: PgPool) {
    let student = create_student(common::build_test_app(pool.clone()), "Old Name").await;
    let id = student["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/students/{id}"),
        json!({ "full_name": "New Name" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["full_name"], "New Name");
    assert_eq!(json["data"]["cohort"], "CS-2026");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_embedding_flips_has_embedding(pool: PgPool) {
    let student = create_student(common::build_test_app(pool.clone()), "Ada").await;
    let id = student["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/students/{id}/embedding"),
        json!({ "embedding": embedding_with(&[0.5, -0.25]) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["has_embedding"], true);
    assert!(json["data"]["embedding_enrolled_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_embedding_rejects_wrong_dimension(pool: PgPool) {
    let student = create_student(common::build_test_app(pool.clone()), "Ada").await;
    let id = student["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/students/{id}/embedding"),
        json!({ "embedding": [0.1, 0.2, 0.3] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_embedding_for_unknown_student_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/students/999999/embedding",
        json!({ "embedding": embedding_with(&[]) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn attendance_history_for_unknown_student_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/students/999999/attendance",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn attendance_history_starts_empty(pool: PgPool) {
    let student = create_student(common::build_test_app(pool.clone()), "Ada").await;
    let id = student["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/students/{id}/attendance"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
