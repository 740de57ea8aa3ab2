use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use vitrine_api::config::ServerConfig;
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;
use vitrine_core::theme::ThemeEntry;

/// Bearer token accepted by the test app's admin surface.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_token: TEST_ADMIN_TOKEN.to_string(),
        domains_allowed: vec!["offers.example".to_string(), "deals.example".to_string()],
        themes_dir: PathBuf::from("/nonexistent"),
        permissive_resolve: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Reuses the production router builder so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that `main.rs` assembles.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let themes = vec![
        ThemeEntry { name: "blue".to_string(), label: "Blue".to_string() },
        ThemeEntry { name: "green".to_string(), label: "Green".to_string() },
    ];

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        themes: Arc::new(themes),
    };

    build_app_router(state, &config)
}

/// Send a GET request with no extra headers.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with an explicit `Host` header (public resolution).
pub async fn get_with_host(app: Router, uri: &str, host: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(HOST, host)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with the admin bearer token.
pub async fn authed_get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and the admin bearer token.
pub async fn authed_post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and the admin bearer token.
pub async fn authed_put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with the admin bearer token.
pub async fn authed_delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and no authorization header.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
