//! Task Server - 任务看板 REST 服务
//!
//! # 架构概述
//!
//! 为 Admin / Employee / Team Lead 三个仪表盘提供数据：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB，三个独立集合
//! - **HTTP API** (`api`): 员工、组长、任务的 CRUD 与批量删除
//!
//! # 模块结构
//!
//! ```text
//! task-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models, repository)
//! └── utils/         # 日志、校验、JSON 提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> Result<Config, crate::core::ServerError> {
    // .env 文件可选
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    if config.http_port == 0 {
        return Err(crate::core::ServerError::Config("HTTP_PORT must not be 0".into()));
    }

    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  _____         _      ____
 |_   _|_ _ ___| | __ / ___|  ___ _ ____   _____ _ __
   | |/ _` / __| |/ / \___ \ / _ \ '__\ \ / / _ \ '__|
   | | (_| \__ \   <   ___) |  __/ |   \ V /  __/ |
   |_|\__,_|___/_|\_\ |____/ \___|_|    \_/ \___|_|
    "#
    );
}
