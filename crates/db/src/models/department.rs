use parking_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `departments` table joined with its building's name.
///
/// `building_name` is `None` when the building has since been deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: DbId,
    pub department_name: String,
    pub building_id: DbId,
    pub building_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    pub department_id: DbId,
    pub department_name: String,
    pub building_id: DbId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDepartment {
    pub department_name: Option<String>,
    pub building_id: Option<DbId>,
}
