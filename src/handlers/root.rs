use crate::routes;
use axum::response::Html;

/// GET / handler - Plain greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/html")
    ),
    tag = "diagnostics"
)]
pub async fn root_handler() -> Html<&'static str> {
    Html("Hello, World!")
}
