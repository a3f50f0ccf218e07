/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use fieldops_api::{app::AppState, config::Config};
/// use fieldops_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// }).await?;
/// let state = AppState::new(pool, config);
/// let app = fieldops_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::{FromRef, Request, State},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use fieldops_shared::auth::session::SessionUser;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Key used to sign session cookies, derived from the configured secret
    session_key: Key,
}

impl AppState {
    /// Creates new application state
    ///
    /// The configured session secret must be at least 64 bytes
    /// (`Config::from_env` enforces this).
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let session_key = Key::from(config.session.secret.as_bytes());
        Self {
            db,
            config: Arc::new(config),
            session_key,
        }
    }

    /// Gets the session signing key
    pub fn session_key(&self) -> &Key {
        &self.session_key
    }
}

/// Lets `SignedCookieJar` extract its key from the application state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                # Service info (public)
/// ├── GET  /health          # Health check (public)
/// ├── POST /register        # Create user (public)
/// ├── POST /login           # Authenticate, set session cookie (public)
/// ├── GET  /logout          # Clear session cookie (public, idempotent)
/// ├── GET  /dashboard       # Role-specific view data (session)
/// ├── POST /book_service    # Create booking (session, role=client)
/// ├── POST /upload_receipt  # Create receipt (session, role=client)
/// └── POST /assign_task     # Create task assignment (session, role=admin)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Session authentication (protected routes only)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public routes, no session required
    let public_routes = Router::new()
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::health_check))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/logout", get(routes::auth::logout));

    // Routes that require an authenticated session; role checks happen
    // inside the handlers
    let protected_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/book_service", post(routes::bookings::book_service))
        .route("/upload_receipt", post(routes::receipts::upload_receipt))
        .route("/assign_task", post(routes::tasks::assign_task))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Session authentication middleware layer
///
/// Verifies the signed session cookie and injects the `SessionUser` into
/// request extensions. A missing, unsigned, or malformed cookie gets the
/// same 401 a never-logged-in request would get.
async fn session_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let jar = SignedCookieJar::from_headers(req.headers(), state.session_key().clone());

    let session = SessionUser::from_jar(&jar)
        .ok_or_else(|| crate::error::ApiError::Unauthorized("Not logged in".to_string()))?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
