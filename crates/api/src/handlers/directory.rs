//! Read-only listings of the organisational tables.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use parking_db::models::building::Building;
use parking_db::models::department::Department;
use parking_db::repositories::{BuildingRepo, DepartmentRepo, ReportRepo};
use parking_db::resource::{ListFilter, Resource};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/status
///
/// Row count per table.
pub async fn table_counts(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<&'static str, i64>>> {
    let counts = ReportRepo::table_counts(&state.pool).await?;
    Ok(Json(counts))
}

/// GET /api/departments
pub async fn list_departments(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentRepo::list(&state.pool, &ListFilter::default()).await?;
    Ok(Json(departments))
}

/// GET /api/buildings
pub async fn list_buildings(State(state): State<AppState>) -> AppResult<Json<Vec<Building>>> {
    let buildings = BuildingRepo::list(&state.pool, &ListFilter::default()).await?;
    Ok(Json(buildings))
}
