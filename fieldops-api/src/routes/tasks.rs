/// Task assignment endpoint
///
/// # Endpoint
///
/// - `POST /assign_task` - assign a task to an agent (session, role=admin)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use fieldops_shared::{
    auth::session::SessionUser,
    models::{
        task::{CreateTaskAssignment, TaskAssignment},
        user::Role,
    },
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Assign task request
#[derive(Debug, Deserialize, Validate)]
pub struct AssignTaskRequest {
    /// The agent receiving the task
    pub agent_id: Uuid,

    /// Free-text description of the work
    #[validate(length(min = 1, max = 255, message = "Task details must be 1-255 characters"))]
    pub task_details: String,
}

/// Assign a task to an agent
///
/// Only admins may assign; any other session gets the same 401 as an
/// unauthenticated request.
///
/// # Errors
///
/// - `401 Unauthorized`: no session, or session role is not admin
/// - `409 Conflict`: `agent_id` does not reference an existing user
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: server error
pub async fn assign_task(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(req): Json<AssignTaskRequest>,
) -> ApiResult<Json<TaskAssignment>> {
    if session.role != Role::Admin {
        return Err(ApiError::Unauthorized("Not logged in".to_string()));
    }

    req.validate()?;

    let task = TaskAssignment::create(
        &state.db,
        CreateTaskAssignment {
            agent_id: req.agent_id,
            task_details: req.task_details,
        },
    )
    .await?;

    tracing::info!(task_id = %task.id, agent_id = %task.agent_id, "Task assigned");

    Ok(Json(task))
}
