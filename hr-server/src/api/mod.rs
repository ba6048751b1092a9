//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录、注册、当前用户
//! - [`departments`] - 部门管理接口
//! - [`employees`] - 员工管理与统计接口
//! - [`users`] - 用户管理接口
//! - [`extract`] - 以统一错误信封拒绝的提取器

pub mod auth;
pub mod departments;
pub mod employees;
pub mod extract;
pub mod health;
pub mod users;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Public: /auth/login, /auth/register, /health
        .merge(auth::router())
        .merge(health::router())
        // Protected by require_auth
        .merge(departments::router())
        .merge(employees::router())
        .merge(users::router())
}

/// Build a fully configured application with middleware and state
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // JWT authentication, injects CurrentUser
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        // Request tracing, outermost
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
