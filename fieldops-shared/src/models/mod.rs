/// Database models for FieldOps
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: user accounts with a closed role enumeration
/// - `booking`: client service bookings
/// - `receipt`: client-submitted receipt references
/// - `task`: admin-assigned agent tasks
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
/// # Ok(())
/// # }
/// ```

pub mod booking;
pub mod receipt;
pub mod task;
pub mod user;
