//! Department API Handlers

use axum::{Json, extract::State};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

use crate::api::extract::{AppJson, AppPath};
use crate::core::ServerState;
use crate::store::Entity;
use crate::utils::AppResult;

/// List all departments
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Department>> {
    Json(state.departments.find_all())
}

/// Get department by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Department>> {
    let department = state
        .departments
        .find_by_id(id)
        .ok_or_else(|| Department::not_found(id))?;
    Ok(Json(department))
}

/// Create a new department
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    let department = state.departments.create(payload)?;
    tracing::info!(id = department.id, name = %department.name, "Department created");
    Ok(Json(department))
}

/// Update a department
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    let department = state.departments.update(id, payload)?;
    tracing::info!(id, "Department updated");
    Ok(Json(department))
}

/// Delete a department
///
/// Employees referencing it keep their `departmentId` and name snapshot.
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<bool>> {
    state.departments.remove(id)?;
    tracing::info!(id, "Department deleted");
    Ok(Json(true))
}
