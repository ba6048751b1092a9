//! User API Module
//!
//! Responses use the public user view; password hashes never leave the server.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// User router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list))
        .route(
            "/users/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
