use crate::error::{ApiError, ErrorResponse};
use crate::extract::JsonPayload;
use crate::models::EchoResponse;
use crate::routes;
use axum::Json;
use serde_json::Value as JsonValue;

/// POST /api/echo handler - Return the payload unchanged
///
/// `count` is the number of characters in the compact JSON rendering of
/// the payload.
#[utoipa::path(
    post,
    path = routes::ECHO,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Payload echoed back", body = EchoResponse),
        (status = 400, description = "Wrong content type or malformed JSON", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn echo_handler(
    JsonPayload(payload): JsonPayload,
) -> Result<Json<EchoResponse>, ApiError> {
    let received = JsonValue::Object(payload);
    let count = received.to_string().chars().count();

    tracing::debug!("Echoing payload of {} characters", count);
    Ok(Json(EchoResponse { received, count }))
}
