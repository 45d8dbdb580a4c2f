//! Shared types for the task tracker
//!
//! Wire models, request/response bodies, the error system, and the pure
//! dashboard logic used by every client of the HTTP API.

pub mod dashboard;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
