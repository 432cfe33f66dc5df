//! JSON API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dcf_core::{DcfError, InputError, ValuationError};
use serde::Serialize;
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Parameters were missing or malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The valuation engine rejected the parameters.
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

impl From<DcfError> for ApiError {
    fn from(err: DcfError) -> Self {
        match err {
            DcfError::Input(e) => ApiError::Input(e),
            DcfError::Valuation(e) => ApiError::Valuation(e),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Input(e) => (StatusCode::BAD_REQUEST, e.code()),
            ApiError::Valuation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.code()),
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
