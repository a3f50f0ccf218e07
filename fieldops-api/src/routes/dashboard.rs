/// Dashboard endpoint
///
/// Replaces the role-specific dashboard view with a role-specific JSON
/// payload: clients see their bookings and receipts, agents their
/// assignments, admins the agent roster and recent assignments.
///
/// # Endpoint
///
/// - `GET /dashboard` - requires a session, any role

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use fieldops_shared::{
    auth::session::SessionUser,
    models::{
        booking::ServiceBooking,
        receipt::Receipt,
        task::TaskAssignment,
        user::{Role, User},
    },
};
use serde::Serialize;
use uuid::Uuid;

/// How many assignments the admin view shows
const RECENT_ASSIGNMENTS_LIMIT: i64 = 20;

/// Agent roster entry for the admin view
///
/// A separate type so the password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct AgentSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for AgentSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Dashboard response
///
/// Only the section matching the session's role is populated.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,

    /// Client view: own bookings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<ServiceBooking>>,

    /// Client view: own receipts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipts: Option<Vec<Receipt>>,

    /// Agent view: own task assignments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskAssignment>>,

    /// Admin view: the agent roster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentSummary>>,

    /// Admin view: most recent assignments across all agents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_assignments: Option<Vec<TaskAssignment>>,
}

/// Dashboard handler
///
/// # Errors
///
/// - `401 Unauthorized`: no session, or the session references a user
///   that no longer exists
/// - `500 Internal Server Error`: server error
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> ApiResult<Json<DashboardResponse>> {
    // The cookie outliving the user row is treated like a stale session
    let user = User::find_by_id(&state.db, session.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Not logged in".to_string()))?;

    let mut response = DashboardResponse {
        user_id: user.id,
        username: user.username,
        role: user.role,
        bookings: None,
        receipts: None,
        tasks: None,
        agents: None,
        recent_assignments: None,
    };

    match user.role {
        Role::Client => {
            response.bookings = Some(ServiceBooking::list_by_client(&state.db, user.id).await?);
            response.receipts = Some(Receipt::list_by_client(&state.db, user.id).await?);
        }
        Role::Agent => {
            response.tasks = Some(TaskAssignment::list_by_agent(&state.db, user.id).await?);
        }
        Role::Admin => {
            let agents = User::list_by_role(&state.db, Role::Agent)
                .await?
                .into_iter()
                .map(AgentSummary::from)
                .collect();
            response.agents = Some(agents);
            response.recent_assignments =
                Some(TaskAssignment::list_recent(&state.db, RECENT_ASSIGNMENTS_LIMIT).await?);
        }
    }

    Ok(Json(response))
}
