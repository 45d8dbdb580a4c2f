//! Database Models
//!
//! Stored documents. The business `id` is kept as `business_id` because
//! `id` is the SurrealDB record id. `created_at` comes from
//! [`shared::util::creation_stamp`] and only drives list order.

pub mod employee;
pub mod task;
pub mod team_lead;

pub use employee::{EmployeeContent, EmployeeRecord};
pub use task::{TaskContent, TaskRecord};
pub use team_lead::{TeamLeadContent, TeamLeadRecord};

use surrealdb::RecordId;

/// Store id exposed to clients as `_id`: the record key without table prefix
pub fn store_id(id: &RecordId) -> String {
    id.key().to_string()
}
