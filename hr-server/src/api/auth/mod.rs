//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Build authentication router
/// - /auth/login, /auth/register: public
/// - /auth/me: protected by the global require_auth middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/auth/login", post(handler::login))
        .route("/auth/register", post(handler::register))
        .route("/auth/me", get(handler::me))
}
