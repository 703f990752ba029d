//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! over a `#[sqlx::test]`-provided pool and drives it with
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveTime;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use rollcall_api::config::ServerConfig;
use rollcall_api::router::build_app_router;
use rollcall_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The late cutoff defaults to `23:59:59` so check-ins made during the test
/// run classify as present regardless of wall-clock time; tests that
/// exercise the late path override it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        match_threshold: 0.6,
        late_cutoff: NaiveTime::parse_from_str("23:59:59", "%H:%M:%S").unwrap(),
    }
}

/// Build the application router over `pool` with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the application router over `pool` with a custom config.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid 128-dimensional embedding with the given leading coordinates and
/// zeros elsewhere.
pub fn embedding_with(leading: &[f32]) -> Vec<f32> {
    let mut v = vec![0.0f32; 128];
    v[..leading.len()].copy_from_slice(leading);
    v
}
