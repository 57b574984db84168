use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ItemId, JsonPayload};
use crate::models::{ItemPayload, ItemResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::required_name;
use axum::{extract::State, http::StatusCode, Json};

/// PUT /api/items/{id} handler - Rename an item
///
/// A missing item is reported before the payload is looked at, so an
/// unknown id always yields 404.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Wrong content type or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Missing or empty name", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn put_handler(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    payload: Result<JsonPayload, ApiError>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    if state.store.get(&id).await.is_none() {
        tracing::info!("Item not found with id: {}", id);
        return Err(ApiError::NotFound);
    }

    let JsonPayload(payload) = payload?;
    let name = required_name(&payload)?;

    // The item may have been deleted since the existence check.
    let item = state.store.update(&id, name).await.ok_or(ApiError::NotFound)?;

    tracing::info!("Updated item with id: {}", id);
    Ok((StatusCode::OK, Json(ItemResponse::from(item))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{send, setup_test_app};
    use serde_json::json;

    #[tokio::test]
    async fn test_put_endpoint_success() {
        let state = AppState::default();
        let created = state.store.create("First".to_string()).await;
        let app = setup_test_app(state);

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/items/{}", created.id),
            Some(json!({"name": "Renamed"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let item: ItemResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(item.id, created.id);
        assert_eq!(item.name, "Renamed");
        assert_eq!(item.created_at, ItemResponse::from(created).created_at);
        assert!(item.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_put_endpoint_validation_keeps_state() {
        let state = AppState::default();
        let created = state.store.create("First".to_string()).await;
        let app = setup_test_app(state.clone());
        let uri = format!("/api/items/{}", created.id);

        for payload in [json!({"name": ""}), json!({"name": "  "}), json!({})] {
            let (status, body) = send(&app, "PUT", &uri, Some(payload)).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(error_response.error, "validation_error");
        }

        assert_eq!(state.store.get(&created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_put_endpoint_not_found() {
        let app = setup_test_app(AppState::default());

        let (status, body) = send(&app, "PUT", "/api/items/nope", Some(json!({"name": "X"}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "not_found");
    }

    #[tokio::test]
    async fn test_put_endpoint_not_found_wins_over_bad_body() {
        let app = setup_test_app(AppState::default());

        let (status, _) = send(&app, "PUT", "/api/items/nope", Some(json!("not an object"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_put_endpoint_invalid_json() {
        let state = AppState::default();
        let created = state.store.create("First".to_string()).await;
        let app = setup_test_app(state);

        let (status, body) = crate::handlers::testing::send_raw(
            &app,
            "PUT",
            &format!("/api/items/{}", created.id),
            "application/json",
            "{invalid json}",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.message, "Malformed JSON");
    }
}
