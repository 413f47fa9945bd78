/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Everything the eclipse endpoints can reject.
///
/// Both variants are client errors raised before any orbit computation runs;
/// the core formulas are total once their inputs pass validation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input outside its documented domain, attributed to the offending field
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
    /// Malformed timestamp text, carrying the parser's complaint
    #[error("invalid {field} format: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::Validation { .. } => "INVALID_INPUT",
            ApiError::Parse { .. } => "INVALID_TIMESTAMP",
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
