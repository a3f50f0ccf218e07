/// Task assignment model
///
/// A task assignment records work an admin hands to an agent. Every
/// assignment starts as `Assigned`; like bookings, no status transition is
/// implemented in-scope.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE task_assignments (
///     id TEXT PRIMARY KEY,
///     agent_id TEXT NOT NULL REFERENCES users(id),
///     task_details TEXT NOT NULL,
///     status TEXT NOT NULL DEFAULT 'Assigned',
///     created_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Assignment status, stored as the literal variant name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TaskStatus {
    /// Initial status of every assignment
    Assigned,
    InProgress,
    Completed,
}

/// Work assigned to an agent by an admin
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskAssignment {
    pub id: Uuid,

    /// The agent the task is assigned to
    pub agent_id: Uuid,

    pub task_details: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskAssignment {
    pub agent_id: Uuid,
    pub task_details: String,
}

impl TaskAssignment {
    /// Creates a task assignment with status `Assigned`
    ///
    /// # Errors
    ///
    /// Returns an error if `agent_id` does not reference an existing user
    /// (foreign key violation) or the database write fails.
    pub async fn create(
        pool: &SqlitePool,
        data: CreateTaskAssignment,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, TaskAssignment>(
            r#"
            INSERT INTO task_assignments (id, agent_id, task_details, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, agent_id, task_details, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.agent_id)
        .bind(data.task_details)
        .bind(TaskStatus::Assigned)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists an agent's assignments, newest first
    pub async fn list_by_agent(
        pool: &SqlitePool,
        agent_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, TaskAssignment>(
            r#"
            SELECT id, agent_id, task_details, status, created_at
            FROM task_assignments
            WHERE agent_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(agent_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists the most recent assignments across all agents
    pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, TaskAssignment>(
            r#"
            SELECT id, agent_id, task_details, status, created_at
            FROM task_assignments
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}
