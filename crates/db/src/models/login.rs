use parking_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `login_credentials` table. Never serialized: the
/// password hash must not leave the store.
#[derive(Debug, Clone, FromRow)]
pub struct LoginCredential {
    pub username: String,
    pub employee_id: DbId,
    pub password_hash: String,
    pub booking_auth: bool,
    pub admin_auth: bool,
}

/// Public view of a credential.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    pub username: String,
    pub employee_id: DbId,
    pub booking_auth: bool,
    pub admin_auth: bool,
}

impl From<LoginCredential> for LoginInfo {
    fn from(credential: LoginCredential) -> Self {
        LoginInfo {
            username: credential.username,
            employee_id: credential.employee_id,
            booking_auth: credential.booking_auth,
            admin_auth: credential.admin_auth,
        }
    }
}

/// Insert DTO. The API layer hashes the password before building it.
#[derive(Debug, Clone)]
pub struct CreateLogin {
    pub username: String,
    pub employee_id: DbId,
    pub password_hash: String,
    pub booking_auth: bool,
    pub admin_auth: bool,
}

/// Request body for `POST /api/logins`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoginRequest {
    pub username: String,
    pub employee_id: DbId,
    pub password: String,
    #[serde(default)]
    pub booking_auth: bool,
    #[serde(default)]
    pub admin_auth: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
