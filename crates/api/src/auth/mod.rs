//! Credential handling for login records.

pub mod password;
