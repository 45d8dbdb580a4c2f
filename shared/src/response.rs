//! API Response types
//!
//! Success bodies for delete operations. Record reads and writes return the
//! record itself, not a wrapper.

use serde::{Deserialize, Serialize};

/// Acknowledgement body, e.g. `{"message":"Task deleted successfully"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Bulk delete outcome. Only the aggregate count is reported; callers must
/// not assume it equals the number of identifiers sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub message: String,
    pub deleted_count: u64,
}

impl BulkDeleteResponse {
    /// Build the response for `deleted_count` removed records of `plural` kind
    pub fn new(deleted_count: u64, plural: &str) -> Self {
        Self {
            message: format!("{deleted_count} {plural} deleted successfully"),
            deleted_count,
        }
    }
}
