//! Data models
//!
//! Shared between task-server and dashboard clients (via API).
//! Wire field names are camelCase; `_id` is the store-assigned identifier.

pub mod employee;
pub mod task;
pub mod team_lead;

// Re-exports
pub use employee::*;
pub use task::*;
pub use team_lead::*;

/// Serde adapter for patch fields that may be cleared.
///
/// Use with `#[serde(default, deserialize_with = "nullable::deserialize")]` on
/// an `Option<Option<T>>`: an absent field stays `None` (unchanged), an
/// explicit `null` becomes `Some(None)` (clear).
pub mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(d).map(Some)
    }
}
