/// Authentication endpoints
///
/// This module provides the session lifecycle:
/// - Registration
/// - Login (sets the signed session cookie)
/// - Logout (clears it)
///
/// # Endpoints
///
/// - `POST /register` - Register new user
/// - `POST /login` - Authenticate and establish a session
/// - `GET /logout` - Clear the session

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{extract::State, Json};
use axum_extra::extract::cookie::SignedCookieJar;
use fieldops_shared::{
    auth::{
        password,
        session::SessionUser,
    },
    models::user::{CreateUser, Role, User},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login name
    #[validate(length(min = 3, max = 80, message = "Username must be 3-80 characters"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (checked against the registration policy)
    pub password: String,

    /// Account role; anything outside client/agent/admin is rejected
    /// before this handler runs
    pub role: Role,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Id of the newly created user
    pub user_id: Uuid,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// User ID
    pub user_id: Uuid,

    /// Role of the established session
    pub role: Role,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// {
///   "username": "jdoe",
///   "email": "user@example.com",
///   "password": "Secret123",
///   "role": "client"
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: validation failed (including a password
///   that misses the policy: >= 8 chars, one lowercase, one uppercase,
///   one digit)
/// - `409 Conflict`: username or email already exists
/// - `500 Internal Server Error`: server error
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    req.validate()?;

    // Policy failure creates no record; the caller is re-prompted
    password::validate_password_policy(&req.password).map_err(|message| {
        ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "password".to_string(),
            message,
        }])
    })?;

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
            role: req.role,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(Json(RegisterResponse { user_id: user.id }))
}

/// Login endpoint
///
/// Verifies the credentials and sets the signed session cookie bound to
/// `{user_id, role}`.
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "Secret123"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: unknown email or wrong password — the same
///   generic message either way, so accounts cannot be enumerated
/// - `500 Internal Server Error`: server error
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(SignedCookieJar, Json<LoginResponse>)> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let session = SessionUser::new(user.id, user.role);
    let jar = jar.add(session.into_cookie()?);

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok((
        jar,
        Json(LoginResponse {
            user_id: user.id,
            role: user.role,
        }),
    ))
}

/// Logout endpoint
///
/// Removes the session cookie. Clearing an absent session is a no-op, so
/// calling this while logged out is fine.
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Json<LogoutResponse>) {
    let jar = jar.remove(SessionUser::removal_cookie());

    (
        jar,
        Json(LogoutResponse {
            message: "Logged out".to_string(),
        }),
    )
}
