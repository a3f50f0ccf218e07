/// Receipt model
///
/// A receipt records a client-submitted receipt reference (a URL).
/// Receipts are immutable once created.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE receipts (
///     id TEXT PRIMARY KEY,
///     client_id TEXT NOT NULL REFERENCES users(id),
///     receipt_url TEXT NOT NULL,
///     created_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A client-submitted receipt reference
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Receipt {
    pub id: Uuid,

    /// The client who uploaded the receipt
    pub client_id: Uuid,

    pub receipt_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReceipt {
    pub client_id: Uuid,
    pub receipt_url: String,
}

impl Receipt {
    /// Creates a receipt
    ///
    /// # Errors
    ///
    /// Returns an error if `client_id` does not reference an existing user
    /// or the database write fails.
    pub async fn create(pool: &SqlitePool, data: CreateReceipt) -> Result<Self, sqlx::Error> {
        let receipt = sqlx::query_as::<_, Receipt>(
            r#"
            INSERT INTO receipts (id, client_id, receipt_url, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, client_id, receipt_url, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.client_id)
        .bind(data.receipt_url)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(receipt)
    }

    /// Lists a client's receipts, newest first
    pub async fn list_by_client(
        pool: &SqlitePool,
        client_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let receipts = sqlx::query_as::<_, Receipt>(
            r#"
            SELECT id, client_id, receipt_url, created_at
            FROM receipts
            WHERE client_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(pool)
        .await?;

        Ok(receipts)
    }
}
