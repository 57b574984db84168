use crate::api_doc::openapi_handler;
use crate::handlers::{
    create_handler, delete_handler, echo_handler, fallback_handler, get_handler, health_handler,
    list_handler, method_not_allowed_handler, preflight_handler, put_handler, root_handler,
    time_handler,
};
use crate::middleware::apply_layers;
use crate::routes;
use crate::state::AppState;
use axum::{
    routing::{get, options, post},
    Router,
};

/// Build the application router with all routes and middleware
///
/// Every concrete `/api/...` route also answers `OPTIONS` with the CORS
/// preflight, and the catch-all covers preflights for any other path
/// below `/api/`. Unmatched paths and unsupported methods both answer with
/// the error envelope.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ECHO, post(echo_handler).options(preflight_handler))
        .route(routes::TIME, get(time_handler).options(preflight_handler))
        .route(
            routes::ITEMS,
            get(list_handler)
                .post(create_handler)
                .options(preflight_handler),
        )
        .route(
            routes::ITEM,
            get(get_handler)
                .put(put_handler)
                .delete(delete_handler)
                .options(preflight_handler),
        )
        .route(
            routes::API_ANY,
            options(preflight_handler).fallback(fallback_handler),
        )
        .route(routes::OPENAPI, get(openapi_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler);

    apply_layers(router).with_state(state)
}
