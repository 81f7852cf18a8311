//! Response mapping for `AppError` and `ActionError`.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use parking_api::error::{ActionError, AppError};
use parking_core::error::CoreError;

async fn error_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_envelope() {
    let err = AppError::Core(CoreError::not_found("Employee", 42));
    let (status, json) = error_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Employee with id 42 not found");
}

#[tokio::test]
async fn test_domain_errors_are_client_errors() {
    let cases = [
        (CoreError::Validation("bad".into()), "VALIDATION_ERROR"),
        (CoreError::ConstraintViolation("dup".into()), "CONSTRAINT_VIOLATION"),
        (CoreError::SpotUnavailable { parking_num: 3 }, "SPOT_UNAVAILABLE"),
    ];
    for (err, code) in cases {
        let (status, json) = error_parts(AppError::Core(err).into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], code);
    }

    let (status, _) =
        error_parts(AppError::Core(CoreError::Unauthorized("no".into())).into_response()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_internal_details_are_withheld() {
    let err = AppError::Core(CoreError::Internal("disk on fire".into()));
    let (status, json) = error_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn test_pool_timeout_is_connection_failure() {
    let (status, json) = error_parts(AppError::Database(sqlx::Error::PoolTimedOut).into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONNECTION_FAILURE");
}

#[tokio::test]
async fn test_row_not_found_maps_to_404() {
    let (status, _) = error_parts(AppError::Database(sqlx::Error::RowNotFound).into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_action_error_uses_message_field() {
    let err = ActionError::from(CoreError::SpotUnavailable { parking_num: 4 });
    assert_matches!(&err.0, AppError::Core(CoreError::SpotUnavailable { parking_num: 4 }));

    let (status, json) = error_parts(err.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Parking spot 4 is not available");
    assert!(json.get("error").is_none());
}
