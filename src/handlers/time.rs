use crate::models::{iso8601, TimeResponse};
use crate::routes;
use axum::Json;
use chrono::Utc;

/// GET /api/time handler - Current server time in UTC
#[utoipa::path(
    get,
    path = routes::TIME,
    responses(
        (status = 200, description = "Current UTC time", body = TimeResponse)
    ),
    tag = "diagnostics"
)]
pub async fn time_handler() -> Json<TimeResponse> {
    Json(TimeResponse {
        now: iso8601(Utc::now()),
    })
}
