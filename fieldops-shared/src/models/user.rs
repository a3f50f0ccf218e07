/// User model and database operations
///
/// Users are created at registration and carry one of three fixed roles.
/// The role decides which operations a session may invoke: clients book
/// services and upload receipts, admins assign tasks to agents.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id TEXT PRIMARY KEY,
///     username TEXT NOT NULL UNIQUE,
///     email TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL,
///     role TEXT NOT NULL,
///     created_at TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use fieldops_shared::models::user::{CreateUser, Role, User};
/// use fieldops_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "jdoe".to_string(),
///     email: "user@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     role: Role::Client,
/// }).await?;
///
/// let found = User::find_by_email(&pool, "user@example.com").await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User role
///
/// A closed enumeration: anything outside these three values is rejected
/// at the deserialization boundary, never stored as a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Books services and uploads receipts
    Client,

    /// Receives task assignments from admins
    Agent,

    /// Assigns tasks to agents
    Admin,
}

impl Role {
    /// Converts the role to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// User account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Display/login name, unique across all users
    pub username: String,

    /// Email address, unique across all users
    pub email: String,

    /// Argon2id password hash in PHC string format
    pub password_hash: String,

    /// Role fixed at registration
    pub role: Role,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,

    pub role: Role,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the username or email already exists
    /// (unique constraint violation) or the database write fails.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, username, email, password_hash, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.username)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.role)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    ///
    /// At most one row can match, due to the uniqueness constraint.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users holding a given role, oldest first
    pub async fn list_by_role(pool: &SqlitePool, role: Role) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE role = ?
            ORDER BY created_at ASC
            "#,
        )
        .bind(role)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Counts total number of users
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
