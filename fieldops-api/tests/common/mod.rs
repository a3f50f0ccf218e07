/// Common test utilities for integration tests
///
/// Provides a test context backed by an in-memory SQLite database (one
/// connection, since each in-memory connection is its own database) and
/// helpers for driving the router and handling the session cookie.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use fieldops_api::app::{build_router, AppState};
use fieldops_api::config::{ApiConfig, Config, DatabaseConfig, SessionConfig};
use fieldops_shared::db::schema::ensure_schema;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tower::Service as _;

/// Test context containing the database pool and the router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        ensure_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                secret: "integration-test-session-secret-integration-test-session-secret!!"
                    .to_string(),
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a JSON request, optionally with a session cookie
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().call(request).await.unwrap()
    }

    /// Registers a user, asserting success
    pub async fn register(&self, username: &str, email: &str, password: &str, role: &str) {
        let response = self
            .send(
                "POST",
                "/register",
                None,
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                    "role": role,
                })),
            )
            .await;

        let status = response.status();
        if status != StatusCode::OK {
            let body = body_string(response).await;
            panic!("Registration of {} failed with {}: {}", email, status, body);
        }
    }

    /// Logs in and returns the session cookie (name=value pair)
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .send(
                "POST",
                "/login",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK, "Login should succeed");

        session_cookie(&response).expect("Login should set the session cookie")
    }

    /// Registers and logs in, returning the session cookie
    pub async fn register_and_login(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> String {
        self.register(username, email, password, role).await;
        self.login(email, password).await
    }
}

/// Extracts the session cookie pair from a Set-Cookie header, if present
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get("set-cookie")?.to_str().ok()?;
    let pair = header.split(';').next()?;
    if pair.starts_with("fieldops_session=") {
        Some(pair.to_string())
    } else {
        None
    }
}

/// Collects a response body as a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}

/// Collects a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
