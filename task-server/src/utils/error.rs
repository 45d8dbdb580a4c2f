//! 统一错误处理
//!
//! 处理器直接使用 `shared::error` 中的类型：
//! - [`AppError`] - 带错误码的应用错误
//! - [`ApiResponse`] - 错误响应结构
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::new(ErrorCode::TaskNotFound))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
