/// Signed session cookie
///
/// A logged-in request carries a single signed cookie holding the
/// authenticated identity as JSON: `{"user_id": "...", "role": "client"}`.
/// The signature (keyed from `SESSION_SECRET`) prevents clients from
/// forging a role; the payload itself is not encrypted.
///
/// The session is the only authenticated context in the system: handlers
/// receive it as a per-request value, there is no server-side session store.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::Role;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "fieldops_session";

/// Authenticated identity carried by the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Id of the logged-in user
    pub user_id: Uuid,

    /// Role captured at login time
    pub role: Role,
}

impl SessionUser {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Reads and verifies the session from a signed cookie jar
    ///
    /// Returns `None` if the cookie is absent, its signature does not
    /// verify, or the payload does not parse.
    pub fn from_jar(jar: &SignedCookieJar) -> Option<Self> {
        let cookie = jar.get(SESSION_COOKIE)?;
        serde_json::from_str(cookie.value()).ok()
    }

    /// Builds the session cookie for this identity
    ///
    /// # Errors
    ///
    /// Returns an error if the session payload cannot be serialized.
    pub fn into_cookie(self) -> Result<Cookie<'static>, serde_json::Error> {
        let value = serde_json::to_string(&self)?;
        Ok(Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build())
    }

    /// Builds the cookie that clears the session on logout
    ///
    /// Removing an absent cookie is a no-op, so logout is idempotent.
    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, "")).path("/").build()
    }
}
