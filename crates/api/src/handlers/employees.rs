use axum::extract::State;
use axum::Json;
use parking_core::error::CoreError;
use parking_core::types::DbId;
use parking_db::models::employee::Employee;
use parking_db::repositories::EmployeeRepo;
use parking_db::resource::{ListFilter, Resource};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

/// GET /api/employees
///
/// All employees with department and building names, optionally only those
/// with `?status=FT|PT`.
pub async fn list_employees(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ListFilter>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool, &filter).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Employee", id))?;
    Ok(Json(employee))
}
