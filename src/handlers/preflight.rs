use crate::models::PreflightResponse;
use crate::routes;
use axum::{
    http::header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    response::IntoResponse,
    Json,
};

pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// OPTIONS /api/* handler - CORS preflight
///
/// Answers every path under `/api/` without touching the store.
#[utoipa::path(
    options,
    path = routes::API_ANY,
    params(
        ("path" = String, Path, description = "Any path below /api/")
    ),
    responses(
        (status = 200, description = "Preflight accepted", body = PreflightResponse)
    ),
    tag = "diagnostics"
)]
pub async fn preflight_handler() -> impl IntoResponse {
    (
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        ],
        Json(PreflightResponse { ok: true }),
    )
}
