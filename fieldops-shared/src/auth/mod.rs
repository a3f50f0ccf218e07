/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and the registration password policy
/// - [`session`]: the signed session cookie tying a request to `{user_id, role}`
///
/// # Example
///
/// ```no_run
/// use fieldops_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```

pub mod password;
pub mod session;
