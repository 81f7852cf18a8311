//! Database-free domain types for the parking assignment store.
//!
//! Holds the error taxonomy, id aliases, the closed set of record kinds and
//! the pure validation rules shared by the storage and HTTP layers.

pub mod employee_status;
pub mod error;
pub mod resource;
pub mod types;
pub mod validation;
