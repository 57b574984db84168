use crate::error::{ApiError, ErrorResponse};
use crate::extract::ItemId;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// DELETE /api/items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&id).await {
        tracing::info!("Deleted item with id: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::info!("Item not found with id: {}", id);
        Err(ApiError::NotFound)
    }
}
