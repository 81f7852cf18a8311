use parking_core::types::{Date, DbId, Time};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ev_bookings` table joined with the booking employee's name.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvBooking {
    pub booking_id: DbId,
    pub parking_num: DbId,
    pub employee_id: DbId,
    pub booking_date: Date,
    pub start_time: Time,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvBooking {
    #[serde(alias = "bookId")]
    pub booking_id: DbId,
    pub parking_num: DbId,
    pub employee_id: DbId,
    pub booking_date: Date,
    pub start_time: Time,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEvBooking {
    pub booking_date: Option<Date>,
    pub start_time: Option<Time>,
}
