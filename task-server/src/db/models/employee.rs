//! Employee Model

use serde::{Deserialize, Serialize};
use shared::models::{Employee, EmployeeUpdate, Role};
use surrealdb::RecordId;

/// Employee document as written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContent {
    pub business_id: String,
    pub name: String,
    pub role: Role,
    pub team: String,
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub salary: Option<f64>,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub created_at: i64,
}

impl EmployeeContent {
    /// Apply the provided fields of `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: EmployeeUpdate) {
        if let Some(v) = patch.id {
            self.business_id = v;
        }
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.team {
            self.team = v;
        }
        if let Some(v) = patch.experience {
            self.experience = v;
        }
        if let Some(v) = patch.salary {
            self.salary = v;
        }
        if let Some(v) = patch.mobile {
            self.mobile = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
    }
}

/// Employee document as read back, with its record id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: RecordId,
    pub business_id: String,
    pub name: String,
    pub role: Role,
    pub team: String,
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub salary: Option<f64>,
    pub mobile: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub created_at: i64,
}

impl EmployeeRecord {
    pub fn into_content(self) -> EmployeeContent {
        EmployeeContent {
            business_id: self.business_id,
            name: self.name,
            role: self.role,
            team: self.team,
            experience: self.experience,
            salary: self.salary,
            mobile: self.mobile,
            email: self.email,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

impl From<EmployeeRecord> for Employee {
    fn from(r: EmployeeRecord) -> Self {
        Employee {
            store_id: super::store_id(&r.id),
            id: r.business_id,
            name: r.name,
            role: r.role,
            team: r.team,
            experience: r.experience,
            salary: r.salary,
            mobile: r.mobile,
            email: r.email,
            address: r.address,
        }
    }
}
