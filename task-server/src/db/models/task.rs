//! Task Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Task, TaskStatus, canonical_deadline};
use surrealdb::RecordId;

/// Task document as written to the store
///
/// The deadline is stored in its canonical string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContent {
    pub task_name: String,
    #[serde(with = "canonical_deadline")]
    pub deadline: DateTime<Utc>,
    pub team: String,
    pub assigned_to: String,
    pub status: TaskStatus,
    pub created_at: i64,
}

/// Task document as read back, with its record id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    pub task_name: String,
    #[serde(with = "canonical_deadline")]
    pub deadline: DateTime<Utc>,
    pub team: String,
    pub assigned_to: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub created_at: i64,
}

impl TaskRecord {
    pub fn into_content(self) -> TaskContent {
        TaskContent {
            task_name: self.task_name,
            deadline: self.deadline,
            team: self.team,
            assigned_to: self.assigned_to,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(r: TaskRecord) -> Self {
        Task {
            store_id: super::store_id(&r.id),
            task_name: r.task_name,
            deadline: r.deadline,
            team: r.team,
            assigned_to: r.assigned_to,
            status: r.status,
        }
    }
}
