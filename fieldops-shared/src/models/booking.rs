/// Service booking model
///
/// A booking records a client's service request. Every booking starts as
/// `Pending`; no status transition is wired up yet, the extra variants
/// exist so stored values have somewhere to go once an agent workflow
/// lands.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE service_bookings (
///     id TEXT PRIMARY KEY,
///     client_id TEXT NOT NULL REFERENCES users(id),
///     service_details TEXT NOT NULL,
///     status TEXT NOT NULL DEFAULT 'Pending',
///     created_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Booking status, stored as the literal variant name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum BookingStatus {
    /// Initial status of every booking
    Pending,
    InProgress,
    Completed,
}

/// A client's service booking
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceBooking {
    pub id: Uuid,

    /// The client who booked the service
    pub client_id: Uuid,

    pub service_details: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceBooking {
    pub client_id: Uuid,
    pub service_details: String,
}

impl ServiceBooking {
    /// Creates a booking with status `Pending`
    ///
    /// # Errors
    ///
    /// Returns an error if `client_id` does not reference an existing user
    /// (foreign key violation) or the database write fails.
    pub async fn create(
        pool: &SqlitePool,
        data: CreateServiceBooking,
    ) -> Result<Self, sqlx::Error> {
        let booking = sqlx::query_as::<_, ServiceBooking>(
            r#"
            INSERT INTO service_bookings (id, client_id, service_details, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, client_id, service_details, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.client_id)
        .bind(data.service_details)
        .bind(BookingStatus::Pending)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(booking)
    }

    /// Finds a booking by ID
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let booking = sqlx::query_as::<_, ServiceBooking>(
            r#"
            SELECT id, client_id, service_details, status, created_at
            FROM service_bookings
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }

    /// Lists a client's bookings, newest first
    pub async fn list_by_client(
        pool: &SqlitePool,
        client_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let bookings = sqlx::query_as::<_, ServiceBooking>(
            r#"
            SELECT id, client_id, service_details, status, created_at
            FROM service_bookings
            WHERE client_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }
}
