//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organisational role of a person record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Employee")]
    Employee,
    #[serde(rename = "Team Lead")]
    TeamLead,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::TeamLead => "Team Lead",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`Role`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}', expected 'Employee' or 'Team Lead'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(Role::Employee),
            "Team Lead" => Ok(Role::TeamLead),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, used in PUT/DELETE paths
    #[serde(rename = "_id")]
    pub store_id: String,
    /// Business identifier (unique)
    pub id: String,
    pub name: String,
    pub role: Role,
    pub team: String,
    pub experience: Option<f64>,
    pub salary: Option<f64>,
    pub mobile: String,
    /// Unique across employees
    pub email: String,
    pub address: String,
}

/// Create employee payload
///
/// Missing strings decode as empty and are rejected by validation, so the
/// error names the field instead of surfacing a serde message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCreate {
    pub id: String,
    pub name: String,
    pub role: Option<Role>,
    pub team: String,
    pub experience: Option<f64>,
    pub salary: Option<f64>,
    pub mobile: String,
    pub email: String,
    pub address: String,
}

/// Update employee payload (only provided fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// `null` clears the value
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::nullable::deserialize"
    )]
    pub experience: Option<Option<f64>>,
    /// `null` clears the value
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::nullable::deserialize"
    )]
    pub salary: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Query string of `GET /api/employees`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    pub role: Option<String>,
}
