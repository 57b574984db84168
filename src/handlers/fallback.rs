use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for unmatched routes
pub async fn fallback_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri.path());
    ApiError::NotFound
}

/// Fallback for routes that exist but not for the request method
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("Method {} not allowed on {}", method, uri.path());
    ApiError::MethodNotAllowed
}
