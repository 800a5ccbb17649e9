//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of the per-test database provided by `#[sqlx::test]`, with object
//! storage stubbed out so no test touches the network.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atelier_api::auth::jwt::{generate_access_token, JwtConfig};
use atelier_api::auth::password::hash_password;
use atelier_api::config::{PreviewConfig, ServerConfig, StorageConfig};
use atelier_api::preview::LinkPreviewClient;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_api::storage::{ObjectStorage, StorageError};
use atelier_core::roles::ROLE_ADMIN;
use atelier_db::models::user::{CreateUser, User};
use atelier_db::repositories::UserRepo;

/// Object storage stub: accepts every upload and returns a deterministic URL.
pub struct StubStorage;

#[async_trait]
impl ObjectStorage for StubStorage {
    async fn upload(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        Ok(format!("https://cdn.test/{key}"))
    }
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        storage: StorageConfig {
            bucket: "test-bucket".to_string(),
            public_base_url: "https://cdn.test".to_string(),
        },
        preview: PreviewConfig {
            // Unroutable; tests only exercise the pre-flight URL validation.
            endpoint: "http://127.0.0.1:1".to_string(),
            api_key: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(StubStorage),
        preview: Arc::new(LinkPreviewClient::new(&config.preview)),
    };
    build_app_router(state, &config)
}

/// Create a curator account directly in the database and return the row plus
/// a valid access token for it.
pub async fn seed_admin(pool: &PgPool) -> (User, String) {
    seed_user(pool, "curator@test.com", ROLE_ADMIN).await
}

/// Create an account with an arbitrary role (for RBAC tests).
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hashed,
        display_name: "Test Curator".to_string(),
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");

    let token = generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed");
    (user, token)
}

/// Plaintext password every seeded account uses.
pub const TEST_PASSWORD: &str = "test_password_123!";

// ---------------------------------------------------------------------------
// Request helpers (each consumes the router via `oneshot`)
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request construction should succeed");
    app.oneshot(request).await.expect("request should complete")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
