//! API error types and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the image listing endpoint.
///
/// Nothing is caught or retried locally; every failure propagates to the
/// framework as a status code, and no partial listing is ever returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The connection string cannot be turned into a storage session.
    #[error("invalid storage configuration: {0}")]
    Config(String),

    /// The storage service rejected or failed the listing.
    #[error("storage request failed: {0}")]
    Storage(#[from] azure_core::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Storage(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        (self.status_code(), self.to_string()).into_response()
    }
}
