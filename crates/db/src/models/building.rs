use parking_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `buildings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub building_id: DbId,
    pub building_name: String,
    pub parking_capacity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuilding {
    pub building_id: DbId,
    pub building_name: String,
    pub parking_capacity: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBuilding {
    pub building_name: Option<String>,
    pub parking_capacity: Option<i64>,
}
