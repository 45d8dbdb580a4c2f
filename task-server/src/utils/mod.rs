//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`AppJson`] - 统一拒绝格式的 JSON 提取器
//! - 日志、输入校验

pub mod error;
pub mod json;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use json::AppJson;
