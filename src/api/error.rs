//! HTTP mapping for errors raised by the JSON endpoints.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error returned by a handler
#[derive(Debug)]
pub enum ApiError {
    /// The requested content does not exist or is not public
    NotFound(String),
    /// Anything raised by the core
    Core(Error),
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self::Core(e)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            Self::Core(Error::Validation { message }) => {
                (StatusCode::BAD_REQUEST, "VALIDATION", message)
            }
            Self::Core(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { code, detail })).into_response()
    }
}

/// Handler result
pub type ApiResult<T> = std::result::Result<T, ApiError>;
