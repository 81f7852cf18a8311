//! Login credential management and verification.
//!
//! Passwords are hashed with Argon2id before they reach the store and the
//! hash is never returned. The booking / admin flags are reported back on a
//! successful login but not enforced by any route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parking_core::error::CoreError;
use parking_core::validation::{validate_id, validate_username};
use parking_db::models::login::{
    ChangePasswordRequest, CreateLogin, CreateLoginRequest, LoginInfo, LoginRequest,
};
use parking_db::repositories::LoginRepo;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

fn hash_or_internal(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

fn verify_or_internal(password: &str, hash: &str) -> AppResult<bool> {
    verify_password(password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))
}

// ---------------------------------------------------------------------------
// Credential management
// ---------------------------------------------------------------------------

/// GET /api/logins
pub async fn list_logins(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LoginInfo>>>> {
    let logins = LoginRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(logins)))
}

/// POST /api/logins
///
/// Create a credential for an existing employee. Returns 201 without the hash.
pub async fn create_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLoginRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<LoginInfo>>)> {
    validate_username(&input.username)?;
    validate_id(input.employee_id, "employeeId")?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;

    let create_dto = CreateLogin {
        username: input.username,
        employee_id: input.employee_id,
        password_hash: hash_or_internal(&input.password)?,
        booking_auth: input.booking_auth,
        admin_auth: input.admin_auth,
    };

    let login = LoginRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(login))))
}

/// PUT /api/logins/{username}/password
///
/// Requires the current password. Returns 204 No Content.
pub async fn change_password(
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
    AppJson(input): AppJson<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let credential = LoginRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| CoreError::not_found("Login", &username))?;

    if !verify_or_internal(&input.old_password, &credential.password_hash)? {
        return Err(CoreError::Unauthorized("Current password is incorrect".into()).into());
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;
    let new_hash = hash_or_internal(&input.new_password)?;

    let replaced = LoginRepo::replace_password_hash(
        &state.pool,
        &username,
        &credential.password_hash,
        &new_hash,
    )
    .await?;
    if !replaced {
        return Err(CoreError::Unauthorized("Password was changed concurrently".into()).into());
    }

    tracing::info!(username = %username, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/logins/{username}
///
/// Returns 204 No Content, or 404 if no such credential.
pub async fn delete_login(
    State(state): State<AppState>,
    AppPath(username): AppPath<String>,
) -> AppResult<StatusCode> {
    if LoginRepo::delete(&state.pool, &username).await? {
        tracing::info!(username = %username, "Login deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Login", username).into())
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Check a username / password pair. On success returns the credential's
/// employee id and authorization flags; any mismatch is a 401 that does not
/// reveal whether the username exists.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginInfo>>> {
    let credential = LoginRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_or_internal(&input.password, &credential.password_hash)? {
        tracing::info!(username = %input.username, "Login rejected");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    tracing::info!(username = %credential.username, "Login verified");
    Ok(Json(DataResponse::new(LoginInfo::from(credential))))
}
