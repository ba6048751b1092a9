//! User API Handlers

use axum::{Json, extract::State};
use shared::models::{PublicUser, User, UserUpdate};

use crate::api::extract::{AppJson, AppPath};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::store::Entity;
use crate::utils::AppResult;

/// List all users
pub async fn list(State(state): State<ServerState>) -> Json<Vec<PublicUser>> {
    Json(state.user_service().list())
}

/// Get user by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<PublicUser>> {
    let user = state
        .users
        .find_by_id(id)
        .map(PublicUser::from)
        .ok_or_else(|| User::not_found(id))?;
    Ok(Json(user))
}

/// Update a user; a new password is hashed before storage
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UserUpdate>,
) -> AppResult<Json<PublicUser>> {
    let user = state.user_service().update(id, payload)?;
    Ok(Json(user))
}

/// Delete a user
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    current: CurrentUser,
) -> AppResult<Json<bool>> {
    state.users.remove(id)?;
    tracing::info!(id, deleted_by = current.id, "User deleted");
    Ok(Json(true))
}
