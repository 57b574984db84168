use crate::error::{ApiError, ErrorResponse};
use crate::extract::JsonPayload;
use crate::models::{ItemPayload, ItemResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::required_name;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/items handler - Create an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Wrong content type or malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or empty name", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let name = required_name(&payload)?;

    let item = state.store.create(name).await;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}
