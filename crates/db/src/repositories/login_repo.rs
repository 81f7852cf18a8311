//! Repository for the `login_credentials` table.
//!
//! Stores argon2 hashes only. Hashing and verification happen in the API
//! layer; this repo never sees a plaintext password.

use parking_core::error::CoreError;

use crate::error::StoreResult;
use crate::models::login::{CreateLogin, LoginCredential, LoginInfo};
use crate::DbPool;

/// Column list for `login_credentials` queries.
const COLUMNS: &str = "username, employee_id, password_hash, booking_auth, admin_auth";

/// Columns safe to expose.
const INFO_COLUMNS: &str = "username, employee_id, booking_auth, admin_auth";

pub struct LoginRepo;

impl LoginRepo {
    /// Insert a credential for an existing employee.
    pub async fn create(pool: &DbPool, input: &CreateLogin) -> StoreResult<LoginInfo> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO login_credentials \
                 (username, employee_id, password_hash, booking_auth, admin_auth) \
             SELECT ?1, ?2, ?3, ?4, ?5 \
             WHERE EXISTS (SELECT 1 FROM employees WHERE employee_id = ?2)",
        )
        .bind(&input.username)
        .bind(input.employee_id)
        .bind(&input.password_hash)
        .bind(input.booking_auth)
        .bind(input.admin_auth)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::missing_reference("Employee", input.employee_id).into());
        }
        tx.commit().await?;

        tracing::info!(username = %input.username, employee_id = input.employee_id, "Login created");
        Ok(LoginInfo {
            username: input.username.clone(),
            employee_id: input.employee_id,
            booking_auth: input.booking_auth,
            admin_auth: input.admin_auth,
        })
    }

    pub async fn list(pool: &DbPool) -> StoreResult<Vec<LoginInfo>> {
        let query = format!("SELECT {INFO_COLUMNS} FROM login_credentials ORDER BY username");
        let rows = sqlx::query_as::<_, LoginInfo>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Full credential including the hash, for verification.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> StoreResult<Option<LoginCredential>> {
        let query = format!("SELECT {COLUMNS} FROM login_credentials WHERE username = ?1");
        let row = sqlx::query_as::<_, LoginCredential>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Swap the stored hash, but only if it still equals `current_hash`.
    ///
    /// Returns `false` if the credential is gone or its hash changed since
    /// the caller verified it.
    pub async fn replace_password_hash(
        pool: &DbPool,
        username: &str,
        current_hash: &str,
        new_hash: &str,
    ) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE login_credentials SET password_hash = ?3 \
             WHERE username = ?1 AND password_hash = ?2",
        )
        .bind(username)
        .bind(current_hash)
        .bind(new_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &DbPool, username: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM login_credentials WHERE username = ?1")
            .bind(username)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
