//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeCreate, EmployeeQuery, EmployeeUpdate, Role};
use shared::request::EmployeeBulkDelete;
use shared::response::{BulkDeleteResponse, MessageResponse};

use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, Repository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_id_list,
    validate_non_negative, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

fn validate_create(payload: &EmployeeCreate) -> AppResult<()> {
    validate_required_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if payload.role.is_none() {
        return Err(AppError::required("role"));
    }
    validate_required_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_non_negative(payload.experience, "experience")?;
    validate_non_negative(payload.salary, "salary")?;
    Ok(())
}

fn validate_update(payload: &EmployeeUpdate) -> AppResult<()> {
    validate_optional_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_non_negative(payload.experience.flatten(), "experience")?;
    validate_non_negative(payload.salary.flatten(), "salary")?;
    Ok(())
}

/// List employees, optionally filtered by `?role=`
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Employee>>> {
    let Query(query) = query?;
    let repo = EmployeeRepository::new(state.db.clone());

    let role = match query.role.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<Role>().map_err(|e| {
            AppError::with_message(ErrorCode::EmployeeInvalidRole, e.to_string())
                .with_detail("field", "role")
        })?),
        _ => None,
    };

    let employees = match role {
        Some(role) => repo.find_by_role(role).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(employees))
}

/// Get employee by store id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_create(&payload)?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_update(&payload)?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// Delete every listed employee, reporting how many were removed
pub async fn bulk_delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeBulkDelete>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let ids = validate_id_list(&payload.employee_ids, "employeeIds", "employee")?;

    let repo = EmployeeRepository::new(state.db.clone());
    let count = repo.delete_many(ids).await?;
    Ok(Json(BulkDeleteResponse::new(count, "employees")))
}
