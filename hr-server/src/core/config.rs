use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 默认 HTTP 端口
pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | JWT_SECRET | - | JWT 密钥 (至少 32 字符; release 必填) |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 (分钟) |
///
/// 日志相关变量 (`LOG_LEVEL`, `LOG_DIR`) 由 [`crate::setup_environment`] 在加载配置前读取。
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 JWT_SECRET=... cargo run -p hr-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的项使用默认值; JWT 密钥不合法时返回错误
    pub fn from_env() -> Result<Self> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt,
        })
    }

    /// 使用给定 JWT 配置和默认值构造 (常用于测试)
    pub fn with_jwt(jwt: JwtConfig) -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: DEFAULT_HTTP_PORT,
            environment: "development".into(),
            jwt,
        }
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
