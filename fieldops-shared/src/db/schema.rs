/// Schema bootstrap
///
/// The schema is fixed and small, so it is created directly at startup
/// with `CREATE TABLE IF NOT EXISTS` statements rather than a migration
/// history. Running the bootstrap against an existing database is a no-op.

use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS service_bookings (
        id TEXT PRIMARY KEY,
        client_id TEXT NOT NULL REFERENCES users(id),
        service_details TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'Pending',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS receipts (
        id TEXT PRIMARY KEY,
        client_id TEXT NOT NULL REFERENCES users(id),
        receipt_url TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS task_assignments (
        id TEXT PRIMARY KEY,
        agent_id TEXT NOT NULL REFERENCES users(id),
        task_details TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'Assigned',
        created_at TEXT NOT NULL
    )
    "#,
];

/// Creates all tables that do not exist yet
///
/// # Errors
///
/// Returns an error if any DDL statement fails to execute.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema is up to date");
    Ok(())
}
