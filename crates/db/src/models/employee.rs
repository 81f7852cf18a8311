use parking_core::employee_status::EmployeeStatus;
use parking_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employees` table with its department, building and the
/// spot it currently occupies.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub employee_status: String,
    pub department_id: DbId,
    pub age: i64,
    pub department_name: Option<String>,
    pub building_id: Option<DbId>,
    pub building_name: Option<String>,
    pub parking_num: Option<DbId>,
}

/// Payload for `createEmployee`. `status` is accepted as an alias of
/// `employeeStatus` for the legacy add-employee endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub employee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "status")]
    pub employee_status: EmployeeStatus,
    pub department_id: DbId,
    pub age: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(alias = "status")]
    pub employee_status: Option<EmployeeStatus>,
    pub department_id: Option<DbId>,
    pub age: Option<i64>,
}
