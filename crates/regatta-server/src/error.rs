//! Error types for the registration service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registration_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Invalid gender")]
    InvalidGender,

    #[error("Invalid boat class")]
    InvalidBoatClass,

    #[error("Malformed request body")]
    MalformedRequest,

    #[error("Invalid admin token")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Report generation error: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            ServerError::InvalidGender => (StatusCode::BAD_REQUEST, "INVALID_GENDER"),
            ServerError::InvalidBoatClass => (StatusCode::BAD_REQUEST, "INVALID_BOAT_CLASS"),
            ServerError::MalformedRequest => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ServerError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            ServerError::Report(_) => (StatusCode::INTERNAL_SERVER_ERROR, "REPORT_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
