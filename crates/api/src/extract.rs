//! Extractors whose rejections use the API error envelope instead of axum's
//! plain-text bodies.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::{ActionError, AppError};

/// JSON body extractor for data endpoints.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// JSON body extractor for the legacy action endpoints.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ActionError))]
pub struct ActionJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
