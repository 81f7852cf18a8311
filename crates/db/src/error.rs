//! Error type returned by every store operation.

use parking_core::error::CoreError;

/// Primary SQLite result code shared by all constraint failures
/// (extended codes keep it in their low byte).
const SQLITE_CONSTRAINT: i32 = 19;

/// Either a domain failure (missing row, broken constraint, lost assignment
/// race) or a storage failure the caller cannot fix.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    /// Constraint failures reported by SQLite (primary key, unique, check,
    /// not-null) are client-caused and become `ConstraintViolation`.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Core(CoreError::ConstraintViolation(
                    "a record with this key already exists".into(),
                ));
            }
            if is_constraint_code(db_err.code().as_deref()) {
                return StoreError::Core(CoreError::ConstraintViolation(
                    db_err.message().to_string(),
                ));
            }
        }
        StoreError::Database(err)
    }
}

impl StoreError {
    /// The domain error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            StoreError::Core(core) => Some(core),
            StoreError::Database(_) => None,
        }
    }
}

fn is_constraint_code(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .is_some_and(|c| c & 0xff == SQLITE_CONSTRAINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_extended_constraint_codes() {
        assert!(is_constraint_code(Some("19")));
        assert!(is_constraint_code(Some("275"))); // CHECK
        assert!(is_constraint_code(Some("1299"))); // NOT NULL
        assert!(is_constraint_code(Some("2067"))); // UNIQUE
    }

    #[test]
    fn ignores_other_codes() {
        assert!(!is_constraint_code(None));
        assert!(!is_constraint_code(Some("5"))); // BUSY
        assert!(!is_constraint_code(Some("not-a-number")));
    }
}
