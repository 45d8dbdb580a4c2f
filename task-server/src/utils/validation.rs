//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! the CRUD handlers.

use crate::utils::AppError;
use shared::error::ErrorCode;

// ── Text length limits ──────────────────────────────────────────────

/// Person and task names
pub const MAX_NAME_LEN: usize = 200;

/// Business ids, team names, mobile numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-blank and within the length limit.
///
/// Used for partial updates: absent means "unchanged", blank is rejected.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate that an optional number, if present, is finite and non-negative.
pub fn validate_non_negative(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && (!v.is_finite() || v < 0.0)
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative number"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required number is present, finite and non-negative.
pub fn validate_required_non_negative(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if value.is_none() {
        return Err(AppError::required(field));
    }
    validate_non_negative(value, field)
}

/// Validate a list of optional strings (e.g. certifications): each non-blank.
pub fn validate_text_list(
    values: &Option<Vec<String>>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(list) = values {
        for v in list {
            validate_required_text(v, field, max_len)?;
        }
    }
    Ok(())
}

/// Validate a bulk-delete id list: present, non-empty, non-blank entries.
///
/// `noun` names the records in the message, e.g. "employee".
pub fn validate_id_list<'a>(
    ids: &'a Option<Vec<String>>,
    field: &str,
    noun: &str,
) -> Result<&'a [String], AppError> {
    let ids = match ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => {
            return Err(AppError::invalid_request(format!(
                "Invalid request. An array of {noun} IDs is required."
            ))
            .with_detail("field", field));
        }
    };
    if ids.iter().any(|id| id.trim().is_empty()) {
        return Err(AppError::invalid_request(format!(
            "{field} must not contain blank ids"
        )));
    }
    Ok(ids)
}
