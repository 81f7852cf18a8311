use std::fmt::Display;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Parking spot {parking_num} is not available")]
    SpotUnavailable { parking_num: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] keyed by any displayable id.
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// A referenced parent row (department, building, employee, spot) is missing.
    pub fn missing_reference(entity: &'static str, key: impl Display) -> Self {
        CoreError::ConstraintViolation(format!("{entity} {key} does not exist"))
    }
}
