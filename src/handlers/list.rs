use crate::models::{ItemResponse, ListQuery, ListResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/items handler - List items
///
/// Query parameters:
/// - q: Case-insensitive substring the item name must contain (optional,
///   the first occurrence wins when repeated)
///
/// Clients must not rely on the order of `items`.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(ListQuery),
    responses(
        (status = 200, description = "Matching items", body = ListResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    query: ListQuery,
) -> (StatusCode, Json<ListResponse>) {
    let items: Vec<ItemResponse> = state
        .store
        .list(query.q.as_deref())
        .await
        .into_iter()
        .map(ItemResponse::from)
        .collect();

    let response = ListResponse {
        total: items.len(),
        items,
    };

    tracing::debug!("Listed {} items (q: {:?})", response.total, query.q);

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{send, setup_test_app};
    use std::collections::HashSet;

    async fn list(app: &axum::Router, uri: &str) -> ListResponse {
        let (status, body) = send(app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let app = setup_test_app(AppState::default());

        let response_json = list(&app, "/api/items").await;

        assert!(response_json.items.is_empty());
        assert_eq!(response_json.total, 0);
    }

    #[tokio::test]
    async fn test_list_endpoint_with_data() {
        let state = AppState::default();
        let first = state.store.create("First".to_string()).await;
        let second = state.store.create("Second".to_string()).await;
        let app = setup_test_app(state);

        let response_json = list(&app, "/api/items").await;

        assert_eq!(response_json.total, 2);
        let ids: HashSet<String> = response_json.items.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, HashSet::from([first.id, second.id]));
    }

    #[tokio::test]
    async fn test_list_endpoint_filter() {
        let state = AppState::default();
        let first = state.store.create("First".to_string()).await;
        state.store.create("Second".to_string()).await;
        let app = setup_test_app(state);

        let response_json = list(&app, "/api/items?q=fir").await;
        assert_eq!(response_json.total, 1);
        assert_eq!(response_json.items[0].id, first.id);
        assert_eq!(response_json.items[0].name, "First");

        let response_json = list(&app, "/api/items?q=SECOND").await;
        assert_eq!(response_json.total, 1);
        assert_eq!(response_json.items[0].name, "Second");

        let response_json = list(&app, "/api/items?q=").await;
        assert_eq!(response_json.total, 2);

        let response_json = list(&app, "/api/items?q=missing").await;
        assert_eq!(response_json.total, 0);
        assert!(response_json.items.is_empty());
    }

    #[tokio::test]
    async fn test_list_endpoint_repeated_filter() {
        let state = AppState::default();
        let first = state.store.create("First".to_string()).await;
        state.store.create("Second".to_string()).await;
        let app = setup_test_app(state);

        let response_json = list(&app, "/api/items?q=fir&q=zzz").await;

        assert_eq!(response_json.total, 1);
        assert_eq!(response_json.items[0].id, first.id);
    }
}
