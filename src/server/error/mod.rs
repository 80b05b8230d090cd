//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into enveloped HTTP responses. The `AppError` enum serves
//! as the top-level error type and implements `IntoResponse` so handlers can
//! return it directly with `?`.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::{ApiResponse, ErrorDto},
    server::{error::config::ConfigError, validation::Violation},
};

/// Message returned to clients when the store cannot be reached.
const STORE_UNAVAILABLE: &str = "Store unavailable";

/// Top-level application error type.
///
/// Each variant maps to one class of failure: rejected input, a conflicting
/// write, an unreachable store, or an internal fault.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Connection failures result in 503 Service Unavailable, anything else in
    /// 500 Internal Server Error. Details are logged server-side only.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error, raised when binding or serving the listener fails.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more validation rules failed for the request.
    ///
    /// Results in 400 Bad Request carrying every violation.
    #[error("Request failed validation with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// The write collides with an existing record.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// No store connection was established at startup.
    ///
    /// Results in 503 Service Unavailable.
    #[error("Store unavailable")]
    StoreUnavailable,

    /// The request was refused by an extractor for a reason other than its
    /// content, such as a missing content type or an oversized body.
    ///
    /// Results in the extractor's status with the provided message.
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// A body that does not parse as the route's JSON schema is reported as a
/// violation on `body`. Other rejections keep the status axum assigns them.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation(vec![Violation::malformed_body(rejection.body_text())])
            }
            _ => AppError::Rejected(rejection.status(), rejection.body_text()),
        }
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `"validation failure"` with the list of violations
/// - 409 Conflict - For `Conflict`
/// - Extractor status (413, 415, ...) - For `Rejected`
/// - 503 Service Unavailable - For `StoreUnavailable` and connection-level `DbErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(violations) => {
                let payload: Vec<_> = violations.into_iter().map(Violation::into_dto).collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::validation_failure(payload)),
                )
                    .into_response()
            }
            Self::Conflict(msg) => failure(StatusCode::CONFLICT, msg),
            Self::Rejected(status, msg) => failure(status, msg),
            Self::StoreUnavailable => {
                failure(StatusCode::SERVICE_UNAVAILABLE, STORE_UNAVAILABLE.to_string())
            }
            Self::DbErr(err) if is_connection_error(&err) => {
                tracing::error!("Store connection error: {}", err);
                failure(StatusCode::SERVICE_UNAVAILABLE, STORE_UNAVAILABLE.to_string())
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn failure(status: StatusCode, error: String) -> Response {
    (status, Json(ApiResponse::failure(ErrorDto { error }))).into_response()
}

/// Whether the error means the store could not be reached, as opposed to the
/// store rejecting the statement.
fn is_connection_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::{ResponseMessage, ViolationDto, ViolationLocation};
    use axum::body::to_bytes;
    use serde::de::DeserializeOwned;

    async fn read_body<T: DeserializeOwned>(response: Response) -> ApiResponse<T> {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request_with_violations() {
        let err = AppError::Validation(vec![Violation::new(
            ViolationLocation::Body,
            "username",
            "must be present and non-empty",
            None,
        )]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ApiResponse<Vec<ViolationDto>> = read_body(response).await;
        assert_eq!(body.message, ResponseMessage::ValidationFailure);
        assert_eq!(body.payload.len(), 1);
        assert_eq!(body.payload[0].field, "username");
    }

    #[tokio::test]
    async fn conflict_maps_to_409_with_message() {
        let response = AppError::Conflict("taken".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body: ApiResponse<ErrorDto> = read_body(response).await;
        assert_eq!(body.message, ResponseMessage::Failure);
        assert_eq!(body.payload.error, "taken");
    }

    #[tokio::test]
    async fn rejection_keeps_its_status_inside_envelope() {
        let err = AppError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: ApiResponse<ErrorDto> = read_body(response).await;
        assert_eq!(body.message, ResponseMessage::Failure);
        assert_eq!(body.payload.error, "too big");
    }

    #[tokio::test]
    async fn store_unavailable_maps_to_503() {
        let response = AppError::StoreUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: ApiResponse<ErrorDto> = read_body(response).await;
        assert_eq!(body.payload.error, STORE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn statement_errors_hide_details() {
        let response = AppError::DbErr(DbErr::Custom("secret detail".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiResponse<ErrorDto> = read_body(response).await;
        assert_eq!(body.message, ResponseMessage::Failure);
        assert_eq!(body.payload.error, "Internal server error");
    }
}
