//! Request types for the shared crate
//!
//! Bulk-delete bodies. Each resource group keeps the key name its dashboard
//! already sends (`employeeIds`, `teamLeadIds`, `taskIds`).

use serde::{Deserialize, Serialize};

/// Body of `DELETE /api/employees`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBulkDelete {
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
}

/// Body of `DELETE /api/teamleads`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLeadBulkDelete {
    #[serde(default)]
    pub team_lead_ids: Option<Vec<String>>,
}

/// Body of `DELETE /api/tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBulkDelete {
    #[serde(default)]
    pub task_ids: Option<Vec<String>>,
}
