//! Field-level validation rules for incoming records.
//!
//! Each helper returns `CoreError::Validation` naming the offending field so
//! the HTTP layer can surface the message unchanged.

use crate::error::CoreError;
use crate::types::DbId;

/// Longest accepted name (building, department, person).
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest accepted login username.
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Upper bound for a plausible employee age.
pub const MAX_AGE: i64 = 150;

/// Require a non-blank name of at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(value: &str, field: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Client-supplied primary keys must be positive.
pub fn validate_id(value: DbId, field: &str) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_non_negative(value: i64, field: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_age(age: i64) -> Result<(), CoreError> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(CoreError::Validation(format!(
            "age must be between 0 and {MAX_AGE}, got {age}"
        )));
    }
    Ok(())
}

/// Usernames are non-empty, contain no whitespace and fit the column.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation("username must not be empty".into()));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "username must not contain whitespace".into(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}
