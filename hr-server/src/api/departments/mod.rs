//! Department API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Department router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/departments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
