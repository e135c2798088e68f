//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fruithub_domain::error::{FruitHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FruitHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(FruitHubError);

impl From<FruitHubError> for ApiError {
    fn from(err: FruitHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FruitHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            FruitHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            FruitHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            FruitHubError::Storage(err) => {
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
