//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use quotesvc_domain::error::QuoteError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`QuoteError`] to an HTTP response with appropriate status code.
pub struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            QuoteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            QuoteError::AlreadyExists => (StatusCode::CONFLICT, self.0.to_string()),
            QuoteError::NoQuotes => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
            QuoteError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
