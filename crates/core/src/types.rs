/// All primary keys are client-supplied SQLite INTEGERs.
pub type DbId = i64;

/// Calendar dates (wait-since, booking dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Booking start times are wall-clock times on the booking date.
pub type Time = chrono::NaiveTime;
