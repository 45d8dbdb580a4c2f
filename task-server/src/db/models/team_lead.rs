//! Team Lead Model

use serde::{Deserialize, Serialize};
use shared::models::{Role, TeamLead, TeamLeadUpdate};
use surrealdb::RecordId;

/// Team lead document as written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLeadContent {
    pub business_id: String,
    pub name: String,
    /// Always [`Role::TeamLead`]
    pub role: Role,
    pub team: String,
    pub experience: f64,
    pub salary: f64,
    pub mobile: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub leadership_experience: f64,
    pub created_at: i64,
}

impl TeamLeadContent {
    /// Apply the provided fields of `patch`; role cannot change
    pub fn apply(&mut self, patch: TeamLeadUpdate) {
        if let Some(v) = patch.id {
            self.business_id = v;
        }
        if let Some(v) = patch.name {
            self.name = v;
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
        if let Some(v) = patch.certifications {
            self.certifications = v;
        }
        if let Some(v) = patch.leadership_experience {
            self.leadership_experience = v;
        }
    }
}

/// Team lead document as read back, with its record id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamLeadRecord {
    pub id: RecordId,
    pub business_id: String,
    pub name: String,
    pub team: String,
    pub experience: f64,
    pub salary: f64,
    pub mobile: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub leadership_experience: f64,
    #[serde(default)]
    pub created_at: i64,
}

impl TeamLeadRecord {
    pub fn into_content(self) -> TeamLeadContent {
        TeamLeadContent {
            business_id: self.business_id,
            name: self.name,
            role: Role::TeamLead,
            team: self.team,
            experience: self.experience,
            salary: self.salary,
            mobile: self.mobile,
            email: self.email,
            address: self.address,
            certifications: self.certifications,
            leadership_experience: self.leadership_experience,
            created_at: self.created_at,
        }
    }
}

impl From<TeamLeadRecord> for TeamLead {
    fn from(r: TeamLeadRecord) -> Self {
        TeamLead {
            store_id: super::store_id(&r.id),
            id: r.business_id,
            name: r.name,
            role: Role::TeamLead,
            team: r.team,
            experience: r.experience,
            salary: r.salary,
            mobile: r.mobile,
            email: r.email,
            address: r.address,
            certifications: r.certifications,
            leadership_experience: r.leadership_experience,
        }
    }
}
