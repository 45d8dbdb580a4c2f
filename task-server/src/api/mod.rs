//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工接口 (/api/employees)
//! - [`team_leads`] - 组长接口 (/api/teamleads)
//! - [`tasks`] - 任务接口 (/api/tasks)

pub mod employees;
pub mod health;
pub mod tasks;
pub mod team_leads;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
