//! Team Lead API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{TeamLead, TeamLeadCreate, TeamLeadUpdate};
use shared::request::TeamLeadBulkDelete;
use shared::response::{BulkDeleteResponse, MessageResponse};

use crate::core::ServerState;
use crate::db::repository::{Repository, TeamLeadRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_id_list,
    validate_non_negative, validate_optional_text, validate_required_non_negative,
    validate_required_text, validate_text_list,
};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

fn validate_create(payload: &TeamLeadCreate) -> AppResult<()> {
    validate_required_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_required_non_negative(payload.experience, "experience")?;
    validate_required_non_negative(payload.salary, "salary")?;
    validate_required_text(&payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_text_list(&payload.certifications, "certifications", MAX_NAME_LEN)?;
    validate_non_negative(payload.leadership_experience, "leadershipExperience")?;
    Ok(())
}

fn validate_update(payload: &TeamLeadUpdate) -> AppResult<()> {
    validate_optional_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.team, "team", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.experience, "experience")?;
    validate_non_negative(payload.salary, "salary")?;
    validate_optional_text(&payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_text_list(&payload.certifications, "certifications", MAX_NAME_LEN)?;
    validate_non_negative(payload.leadership_experience, "leadershipExperience")?;
    Ok(())
}

/// List all team leads
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TeamLead>>> {
    let repo = TeamLeadRepository::new(state.db.clone());
    let leads = repo.find_all().await?;
    Ok(Json(leads))
}

/// Get team lead by store id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamLead>> {
    let repo = TeamLeadRepository::new(state.db.clone());
    let lead = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TeamLeadNotFound).with_detail("id", id))?;
    Ok(Json(lead))
}

/// Create a new team lead
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TeamLeadCreate>,
) -> AppResult<(StatusCode, Json<TeamLead>)> {
    validate_create(&payload)?;

    let repo = TeamLeadRepository::new(state.db.clone());
    let lead = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// Update a team lead
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<TeamLeadUpdate>,
) -> AppResult<Json<TeamLead>> {
    validate_update(&payload)?;

    let repo = TeamLeadRepository::new(state.db.clone());
    let lead = repo.update(&id, payload).await?;
    Ok(Json(lead))
}

/// Hard delete a team lead
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = TeamLeadRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Team Lead deleted successfully")))
}

/// Delete every listed team lead, reporting how many were removed
pub async fn bulk_delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TeamLeadBulkDelete>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let ids = validate_id_list(&payload.team_lead_ids, "teamLeadIds", "team lead")?;

    let repo = TeamLeadRepository::new(state.db.clone());
    let count = repo.delete_many(ids).await?;
    Ok(Json(BulkDeleteResponse::new(count, "team leads")))
}
