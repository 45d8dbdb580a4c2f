//! Task Model

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task status label
///
/// Any status may follow any other; there is no transition ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Process")]
    InProcess,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Complete")]
    Complete,
}

impl TaskStatus {
    /// All statuses in board order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToDo,
        TaskStatus::InProcess,
        TaskStatus::Testing,
        TaskStatus::Complete,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProcess => "In Process",
            TaskStatus::Testing => "Testing",
            TaskStatus::Complete => "Complete",
        }
    }

    /// Display percentage for progress bars
    pub const fn progress(&self) -> u8 {
        match self {
            TaskStatus::ToDo => 25,
            TaskStatus::InProcess => 50,
            TaskStatus::Testing => 75,
            TaskStatus::Complete => 100,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`TaskStatus`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}', expected one of 'To Do', 'In Process', 'Testing', 'Complete'",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Map a raw status label to its progress percentage.
///
/// Total over all inputs: unrecognized labels map to 0.
pub fn status_to_progress(status: &str) -> u8 {
    status
        .parse::<TaskStatus>()
        .map(|s| s.progress())
        .unwrap_or(0)
}

/// Parse a deadline sent by a client.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Canonical deadline representation: RFC 3339, UTC, millisecond precision
pub fn format_deadline(deadline: &DateTime<Utc>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter writing deadlines in canonical form
pub mod canonical_deadline {
    use super::{format_deadline, parse_deadline};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(deadline: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format_deadline(deadline))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse_deadline(&raw).ok_or_else(|| de::Error::custom(format!("invalid deadline: {raw}")))
    }
}

/// Task record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub store_id: String,
    pub task_name: String,
    #[serde(with = "canonical_deadline")]
    pub deadline: DateTime<Utc>,
    pub team: String,
    /// Display name of the assignee. Not a stable reference: two employees
    /// with the same name cannot be told apart.
    pub assigned_to: String,
    pub status: TaskStatus,
}

/// Create task payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskCreate {
    pub task_name: String,
    /// Raw deadline, parsed with [`parse_deadline`]
    pub deadline: String,
    pub team: String,
    pub assigned_to: String,
    pub status: Option<TaskStatus>,
}

/// Update task payload (commonly just `{ "status": ... }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}
