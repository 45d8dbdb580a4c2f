//! Unified error codes for the task tracker
//!
//! Error codes are shared by the server and any dashboard client.
//! They are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Task errors
//! - 7xxx: Team lead errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that clients written in
/// any language can match on them without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format (malformed JSON, wrong field type, unknown enum value)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Task ====================
    /// Task not found
    TaskNotFound = 6001,
    /// Task deadline is not a valid date
    TaskInvalidDeadline = 6002,

    // ==================== 7xxx: Team Lead ====================
    /// Team lead not found
    TeamLeadNotFound = 7001,
    /// Team lead business id already in use
    TeamLeadIdExists = 7002,
    /// Team lead email already in use
    TeamLeadEmailExists = 7003,
    /// Team lead mobile already in use
    TeamLeadMobileExists = 7004,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee business id already in use
    EmployeeIdExists = 8002,
    /// Employee email already in use
    EmployeeEmailExists = 8003,
    /// Role is not one of the known roles
    EmployeeInvalidRole = 8004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Task
            ErrorCode::TaskNotFound => "Task not found",
            ErrorCode::TaskInvalidDeadline => "Task deadline is not a valid date",

            // Team Lead
            ErrorCode::TeamLeadNotFound => "Team Lead not found",
            ErrorCode::TeamLeadIdExists => "Team lead id already exists",
            ErrorCode::TeamLeadEmailExists => "Team lead email already exists",
            ErrorCode::TeamLeadMobileExists => "Team lead mobile already exists",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeIdExists => "Employee id already exists",
            ErrorCode::EmployeeEmailExists => "Employee email already exists",
            ErrorCode::EmployeeInvalidRole => "Role must be 'Employee' or 'Team Lead'",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Task
            6001 => Ok(ErrorCode::TaskNotFound),
            6002 => Ok(ErrorCode::TaskInvalidDeadline),

            // Team Lead
            7001 => Ok(ErrorCode::TeamLeadNotFound),
            7002 => Ok(ErrorCode::TeamLeadIdExists),
            7003 => Ok(ErrorCode::TeamLeadEmailExists),
            7004 => Ok(ErrorCode::TeamLeadMobileExists),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeIdExists),
            8003 => Ok(ErrorCode::EmployeeEmailExists),
            8004 => Ok(ErrorCode::EmployeeInvalidRole),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
