//! HTTP handlers, one module per resource area.

pub mod bookings;
pub mod directory;
pub mod employees;
pub mod legacy;
pub mod logins;
pub mod parking;
pub mod records;
pub mod reports;
pub mod waitlist;
