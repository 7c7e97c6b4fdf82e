//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bankline_core::{BanklineError, CustomerContext, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Simple message payload for mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type for Axum.
///
/// Maps every service error to its HTTP status and serializes an
/// [`ErrorResponse`] body tagged with the customer id from the
/// request-scoped context.
#[derive(Debug)]
pub struct AppError(pub BanklineError);

impl From<BanklineError> for AppError {
    fn from(err: BanklineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorResponse::from_error(&self.0)
            .with_customer_id(CustomerContext::current());

        (status, Json(body)).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
