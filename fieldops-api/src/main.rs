//! # FieldOps API Server
//!
//! Session-authenticated JSON API for a small field-service shop:
//! clients book services and upload receipts, admins assign tasks to
//! agents.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=sqlite://fieldops.db \
//! SESSION_SECRET=$(openssl rand -hex 32) \
//! cargo run -p fieldops-api
//! ```

use fieldops_api::{
    app::{build_router, AppState},
    config::Config,
};
use fieldops_shared::db::{
    pool::{create_pool, DatabaseConfig},
    schema::ensure_schema,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldops_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "FieldOps API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    ensure_schema(&pool).await?;

    let state = AppState::new(pool, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
