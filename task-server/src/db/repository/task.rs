//! Task Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id};
use crate::db::models::{TaskContent, TaskRecord};
use chrono::{DateTime, Utc};
use shared::error::ErrorCode;
use shared::models::{Task, TaskCreate, TaskUpdate, parse_deadline};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "task";

#[derive(Clone)]
pub struct TaskRepository {
    base: BaseRepository,
}

impl TaskRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn deadline(raw: &str) -> RepoResult<DateTime<Utc>> {
        parse_deadline(raw).ok_or_else(|| {
            RepoError::Validation(
                ErrorCode::TaskInvalidDeadline,
                format!("Invalid deadline '{}'", raw),
            )
        })
    }

    fn not_found() -> RepoError {
        RepoError::NotFound(ErrorCode::TaskNotFound, "Task not found".to_string())
    }
}

impl Repository<Task, TaskCreate, TaskUpdate> for TaskRepository {
    /// Find all tasks, in creation order
    async fn find_all(&self) -> RepoResult<Vec<Task>> {
        let records: Vec<TaskRecord> = self
            .base
            .db()
            .query("SELECT * FROM task ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Task::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Task>> {
        let record: Option<TaskRecord> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(record.map(Task::from))
    }

    /// Create a new task; status defaults to "To Do"
    async fn create(&self, data: TaskCreate) -> RepoResult<Task> {
        let content = TaskContent {
            task_name: data.task_name,
            deadline: Self::deadline(&data.deadline)?,
            team: data.team,
            assigned_to: data.assigned_to,
            status: data.status.unwrap_or_default(),
            created_at: shared::util::creation_stamp(),
        };

        let created: Option<TaskRecord> = self
            .base
            .db()
            .query("CREATE task CONTENT $data RETURN AFTER")
            .bind(("data", content))
            .await?
            .take(0)?;

        let task: Task = created
            .ok_or_else(|| RepoError::Database("Failed to create task".to_string()))?
            .into();
        tracing::info!(resource = TABLE, id = %task.store_id, "Task created");
        Ok(task)
    }

    /// Update a task; `{status}` alone leaves every other field unchanged
    async fn update(&self, id: &str, data: TaskUpdate) -> RepoResult<Task> {
        let thing = record_id(TABLE, id);
        let existing: TaskRecord = self
            .base
            .db()
            .select(thing.clone())
            .await?
            .ok_or_else(Self::not_found)?;

        let mut content = existing.into_content();
        if let Some(v) = data.task_name {
            content.task_name = v;
        }
        if let Some(raw) = data.deadline {
            content.deadline = Self::deadline(&raw)?;
        }
        if let Some(v) = data.team {
            content.team = v;
        }
        if let Some(v) = data.assigned_to {
            content.assigned_to = v;
        }
        if let Some(v) = data.status {
            content.status = v;
        }

        let updated: Option<TaskRecord> = self
            .base
            .db()
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", content))
            .await?
            .take(0)?;

        let task: Task = updated.ok_or_else(Self::not_found)?.into();
        tracing::info!(resource = TABLE, id = %task.store_id, status = %task.status, "Task updated");
        Ok(task)
    }

    /// Hard delete a task
    async fn delete(&self, id: &str) -> RepoResult<()> {
        let removed: Option<TaskRecord> = self.base.db().delete(record_id(TABLE, id)).await?;
        if removed.is_none() {
            return Err(Self::not_found());
        }
        tracing::info!(resource = TABLE, id = %id, "Task deleted");
        Ok(())
    }

    async fn delete_many(&self, ids: &[String]) -> RepoResult<u64> {
        let count = self.base.delete_many::<TaskRecord>(TABLE, ids).await?;
        tracing::info!(resource = TABLE, requested = ids.len(), deleted = count, "Tasks bulk deleted");
        Ok(count)
    }
}
