//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devicehub_app::error::ServiceError;
use devicehub_domain::error::{DeviceHubError, ErrorKind, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps service and domain failures to an HTTP response with the matching
/// status code.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<DeviceHubError> for ApiError {
    fn from(err: DeviceHubError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

// Every body decoding failure is a client error, whatever axum would pick.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        DeviceHubError::from(ValidationError::MalformedBody(rejection.body_text())).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self.message, "request failed");
        (status, Json(ErrorBody { error: self.message })).into_response()
    }
}
