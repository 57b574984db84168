use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned for every missing resource
pub const NOT_FOUND_MESSAGE: &str = "resource not found";

/// Message returned when a route exists but not for the request method
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Message returned for every internal failure
pub const INTERNAL_MESSAGE: &str = "unexpected error";

/// Error envelope shared by every non-2xx JSON response
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Classified failure raised by handlers and extractors
///
/// Handlers never build error bodies themselves: they return one of these
/// variants and `IntoResponse` renders it with a fixed status and tag.
#[derive(Debug)]
pub enum ApiError {
    /// Unusable request payload (wrong content type, unparsable body)
    BadRequest(String),
    /// No resource at the requested path
    NotFound,
    /// Route exists, method does not
    MethodNotAllowed,
    /// Payload parsed but failed field validation
    Validation(String),
    /// Anything unexpected. Details are logged, never sent to the client
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound => "not_found",
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::Validation(_) => "validation_error",
            ApiError::Internal(_) => "server_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.tag().to_string();

        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Validation(msg) => msg,
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                INTERNAL_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}
