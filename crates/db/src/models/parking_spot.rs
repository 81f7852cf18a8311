use parking_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `parking_spots` table joined with its occupant's name.
///
/// `employee_id` is the spot occupancy: `None` means the spot is free.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub parking_num: DbId,
    pub employee_id: Option<DbId>,
    pub ev_charge: bool,
    pub temp_assign: bool,
    pub fast_charge: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkingSpot {
    pub parking_num: DbId,
    pub employee_id: Option<DbId>,
    #[serde(default)]
    pub ev_charge: bool,
    #[serde(default)]
    pub temp_assign: bool,
    #[serde(default)]
    pub fast_charge: bool,
}

/// Flag updates. Occupancy only changes through assign / release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateParkingSpot {
    pub ev_charge: Option<bool>,
    pub temp_assign: Option<bool>,
    pub fast_charge: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSpotRequest {
    pub parking_num: DbId,
    pub employee_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSpotRequest {
    pub parking_num: DbId,
}
