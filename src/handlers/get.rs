use crate::error::{ApiError, ErrorResponse};
use crate::extract::ItemId;
use crate::models::ItemResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    match state.store.get(&id).await {
        Some(item) => {
            tracing::debug!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(ItemResponse::from(item))))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}
