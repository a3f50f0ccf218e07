/// Database layer for FieldOps
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: idempotent schema bootstrap run at startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use fieldops_shared::db::pool::{create_pool, DatabaseConfig};
/// use fieldops_shared::db::schema::ensure_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     ensure_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
