use crate::config::APP_NAME;
use crate::models::{iso8601, HealthResponse};
use crate::routes;
use axum::{http::StatusCode, Json};
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// The service has no downstream dependencies, so reaching this handler
/// means the process is healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "diagnostics"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            app: APP_NAME.to_string(),
            now_utc: iso8601(Utc::now()),
        }),
    )
}
