use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    EchoResponse, HealthResponse, ItemPayload, ItemResponse, ListResponse, PreflightResponse,
    TimeResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello-API",
        version = "1.0.0",
        description = "A small in-memory items service with diagnostic endpoints"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::echo::echo_handler,
        handlers::time::time_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::put::put_handler,
        handlers::delete::delete_handler,
        handlers::preflight::preflight_handler
    ),
    components(
        schemas(
            ItemPayload,
            ItemResponse,
            ListResponse,
            EchoResponse,
            TimeResponse,
            HealthResponse,
            PreflightResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "diagnostics", description = "Greeting, health, echo and time"),
        (name = "items", description = "Item collection operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler - Serve the OpenAPI document
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
