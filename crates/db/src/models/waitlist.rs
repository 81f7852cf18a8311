use parking_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `waitlist_entries` table joined with the waiting employee.
///
/// The entry is active while `parking_num` is `None`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub waitlist_id: DbId,
    pub employee_id: DbId,
    pub wait_from: Date,
    pub parking_num: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_status: Option<String>,
    pub department_name: Option<String>,
}

impl WaitlistEntry {
    pub fn is_active(&self) -> bool {
        self.parking_num.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaitlistEntry {
    #[serde(alias = "waitListId")]
    pub waitlist_id: DbId,
    pub employee_id: DbId,
}

/// Records the spot an entry was satisfied with, which deactivates it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateWaitlistEntry {
    pub parking_num: Option<DbId>,
}
