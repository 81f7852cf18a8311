//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct, joined with the parent names shown
//!   in listings
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase.

pub mod booking;
pub mod building;
pub mod department;
pub mod employee;
pub mod login;
pub mod parking_spot;
pub mod report;
pub mod waitlist;
