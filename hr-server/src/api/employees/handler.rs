//! Employee API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::models::{Employee, EmployeeCreate, EmployeeStatistics, EmployeeUpdate};

use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::core::ServerState;
use crate::store::Entity;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub department_id: Option<i64>,
}

/// List employees, optionally filtered by department
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Json<Vec<Employee>> {
    let employees = match query.department_id {
        Some(department_id) => state.employees.find_by_department(department_id),
        None => state.employees.find_all(),
    };
    Json(employees)
}

/// Head counts by status and department
pub async fn statistics(State(state): State<ServerState>) -> Json<EmployeeStatistics> {
    Json(state.employee_service().statistics())
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)
        .ok_or_else(|| Employee::not_found(id))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service().create(payload)?;
    tracing::info!(id = employee.id, employee_id = %employee.employee_id, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service().update(id, payload)?;
    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<bool>> {
    state.employees.remove(id)?;
    tracing::info!(id, "Employee deleted");
    Ok(Json(true))
}
