//! Shared response envelope types for API handlers.
//!
//! Data endpoints answer `{ "success": true, "data": ... }`; the legacy action
//! endpoints answer `{ "success": true, "message": ... }`. Errors are rendered
//! by [`AppError`](crate::error::AppError) / [`ActionError`](crate::error::ActionError).

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": "..." }` for action endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
