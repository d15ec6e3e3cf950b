//! Employee API handlers
//!
//! Contains HTTP request handlers for employee CRUD operations.

use crate::error::AppError;
use crate::models::{Employee, EmployeeId};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// POST /api/empleados - Create a new employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    request.validate().map_err(AppError::InvalidEmployee)?;

    // Ids are assigned by the store
    let request = Employee { id: None, ..request };
    let employee = state.employees.create(request).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/empleados - List all employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    Ok(Json(state.employees.list().await?))
}

/// GET /api/empleados/:id - Get a specific employee
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, AppError> {
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or(AppError::EmployeeNotFound(id))?;

    Ok(Json(employee))
}

/// PUT /api/empleados/:id - Overwrite an existing employee
///
/// The id in the body is ignored in favour of the path id.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(request): Json<Employee>,
) -> Result<Json<Employee>, AppError> {
    // The service saves unconditionally, so existence is checked here
    state
        .employees
        .get_by_id(id)
        .await?
        .ok_or(AppError::EmployeeNotFound(id))?;

    request.validate().map_err(AppError::InvalidEmployee)?;

    let employee = state.employees.update(request.with_id(id)).await?;

    Ok(Json(employee))
}

/// DELETE /api/empleados/:id - Delete an employee
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, AppError> {
    state.employees.delete(id).await?;

    Ok(StatusCode::OK)
}
