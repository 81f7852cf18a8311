//! Aggregate report endpoints.

use axum::extract::State;
use axum::Json;
use parking_core::employee_status::EmployeeStatus;
use parking_core::error::CoreError;
use parking_db::models::employee::Employee;
use parking_db::models::report::{BuildingAvailability, Statistics};
use parking_db::repositories::{EmployeeRepo, ReportRepo};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /api/reports
///
/// `{employeeStatus, parkingUtilization, waitlistCount}` from one snapshot.
pub async fn statistics(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    let stats = ReportRepo::statistics(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/reports/status/{status}
///
/// Employees holding `FT` or `PT`, grouped by department.
pub async fn status_report(
    State(state): State<AppState>,
    AppPath(status): AppPath<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let status: EmployeeStatus = status.parse()?;
    let employees = EmployeeRepo::list_by_status(&state.pool, status).await?;
    Ok(Json(employees))
}

/// GET /api/reports/youngest
pub async fn youngest_employee(State(state): State<AppState>) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::youngest(&state.pool)
        .await?
        .ok_or_else(|| CoreError::not_found("Employee", "youngest"))?;
    Ok(Json(employee))
}

/// GET /api/reports/buildings
pub async fn building_availability(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BuildingAvailability>>> {
    let rows = ReportRepo::building_availability(&state.pool).await?;
    Ok(Json(rows))
}
