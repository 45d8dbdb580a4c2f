//! Team Lead Model
//!
//! Team leads live in their own collection. The shape extends the employee
//! record with numeric experience/salary and leadership details.

use super::employee::Role;
use serde::{Deserialize, Serialize};

/// Team lead record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLead {
    #[serde(rename = "_id")]
    pub store_id: String,
    /// Business identifier (unique)
    pub id: String,
    pub name: String,
    /// Always [`Role::TeamLead`]
    pub role: Role,
    pub team: String,
    /// Years of experience
    pub experience: f64,
    pub salary: f64,
    /// Unique across team leads
    pub mobile: String,
    /// Unique across team leads
    pub email: String,
    pub address: String,
    pub certifications: Vec<String>,
    pub leadership_experience: f64,
}

/// Create team lead payload
///
/// Any `role` sent by the client is ignored; the server forces "Team Lead".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamLeadCreate {
    pub id: String,
    pub name: String,
    pub team: String,
    pub experience: Option<f64>,
    pub salary: Option<f64>,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub certifications: Option<Vec<String>>,
    pub leadership_experience: Option<f64>,
}

/// Update team lead payload (only provided fields change, role is fixed)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamLeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_experience: Option<f64>,
}
