//! Task API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Task, TaskCreate, TaskUpdate, parse_deadline};
use shared::request::TaskBulkDelete;
use shared::response::{BulkDeleteResponse, MessageResponse};

use crate::core::ServerState;
use crate::db::repository::{Repository, TaskRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_id_list, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

fn validate_deadline(raw: &str) -> AppResult<()> {
    if raw.trim().is_empty() {
        return Err(AppError::required("deadline"));
    }
    if parse_deadline(raw).is_none() {
        return Err(AppError::with_message(
            ErrorCode::TaskInvalidDeadline,
            format!("Invalid deadline '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"),
        )
        .with_detail("field", "deadline"));
    }
    Ok(())
}

fn validate_create(payload: &TaskCreate) -> AppResult<()> {
    validate_required_text(&payload.task_name, "taskName", MAX_NAME_LEN)?;
    validate_deadline(&payload.deadline)?;
    validate_required_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.assigned_to, "assignedTo", MAX_NAME_LEN)?;
    Ok(())
}

fn validate_update(payload: &TaskUpdate) -> AppResult<()> {
    validate_optional_text(&payload.task_name, "taskName", MAX_NAME_LEN)?;
    if let Some(deadline) = &payload.deadline {
        validate_deadline(deadline)?;
    }
    validate_optional_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.assigned_to, "assignedTo", MAX_NAME_LEN)?;
    Ok(())
}

/// List all tasks
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Task>>> {
    let repo = TaskRepository::new(state.db.clone());
    let tasks = repo.find_all().await?;
    Ok(Json(tasks))
}

/// Get task by store id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let repo = TaskRepository::new(state.db.clone());
    let task = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound).with_detail("id", id))?;
    Ok(Json(task))
}

/// Create a new task
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TaskCreate>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_create(&payload)?;

    let repo = TaskRepository::new(state.db.clone());
    let task = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task (typically just its status)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<TaskUpdate>,
) -> AppResult<Json<Task>> {
    validate_update(&payload)?;

    let repo = TaskRepository::new(state.db.clone());
    let task = repo.update(&id, payload).await?;
    Ok(Json(task))
}

/// Hard delete a task
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = TaskRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// Delete every listed task, reporting how many were removed
pub async fn bulk_delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TaskBulkDelete>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let ids = validate_id_list(&payload.task_ids, "taskIds", "task")?;

    let repo = TaskRepository::new(state.db.clone());
    let count = repo.delete_many(ids).await?;
    Ok(Json(BulkDeleteResponse::new(count, "tasks")))
}
