//! 认证模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`CredentialService`] - 密码哈希、注册与登录

pub mod credential;
pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use credential::{BCRYPT_COST, CredentialService, hash_password, verify_password};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
