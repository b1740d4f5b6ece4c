//! Error types for the employee server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the HTTP layer.
///
/// The store itself never fails; these are produced while interpreting a
/// request or its outcome.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path id segment is not an integer
    #[error("invalid employee ID")]
    InvalidId,

    /// Body or parameters could not be bound to the expected shape
    #[error("{0}")]
    InvalidRequest(String),

    /// No employee with the requested id
    #[error("employee not found")]
    NotFound,
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
