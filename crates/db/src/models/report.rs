//! Aggregate report shapes. These are read-only projections, not tables.

use parking_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Number of employees holding one status code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Spot totals. `occupied + available == total` always holds because all
/// three come from the same statement.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct ParkingUtilization {
    pub total: i64,
    pub occupied: i64,
    pub available: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub employee_status: Vec<StatusCount>,
    pub parking_utilization: ParkingUtilization,
    pub waitlist_count: i64,
}

/// Per-building parking picture: capacity versus spots held by employees of
/// departments housed in the building.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingAvailability {
    pub building_id: DbId,
    pub building_name: String,
    pub parking_capacity: i64,
    pub occupied_spots: i64,
    pub available_spots: i64,
}
