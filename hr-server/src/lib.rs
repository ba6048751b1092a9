//! HR Server - 人事管理后端
//!
//! # 架构概述
//!
//! - **存储** (`store`): 进程内实体 store，每个 store 一把读写锁
//! - **认证** (`auth`): JWT (HS256) + bcrypt 认证体系
//! - **服务** (`services`): 跨 store 的业务逻辑与统计
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 内存 store 与种子数据
//! ├── auth/          # JWT、凭证、中间件
//! ├── services/      # 员工与用户服务
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 校验、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 `.env`，初始化日志
///
/// 日志先于 [`Config`] 初始化，配置加载期间的告警才能输出。
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 (`RUST_LOG` 优先) |
/// | LOG_DIR | - | 日志目录，存在时按天滚动写文件 |
/// | ENVIRONMENT | development | 为 `production` 时输出 JSON |
pub fn setup_environment() -> anyhow::Result<()> {
    if let Err(e) = dotenv::dotenv() {
        // .env 可选
        eprintln!("No .env file loaded: {e}");
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    let json = std::env::var("ENVIRONMENT").is_ok_and(|env| env == "production");
    init_logger_with_file(log_level.as_deref(), Some(json), log_dir.as_deref());

    Ok(())
}
