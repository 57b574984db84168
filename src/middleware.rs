//! Transport-level middleware applied to every route and the fallback.
//!
//! Layers are listed outermost first: tracing sees the final response,
//! including the common headers and any response produced for a panic.

use crate::config::APP_NAME;
use crate::error::ApiError;
use axum::{
    http::{
        header::{HeaderName, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL},
        HeaderValue,
    },
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Wrap `router` in the HTTP middleware stack
///
/// 1. `Trace` -- logs method, path, status and latency for each request
/// 2. `SetResponseHeader` -- `X-App-Name`, `Access-Control-Allow-Origin` and
///    `Cache-Control`, each only when the handler did not set it
/// 3. `CatchPanic` -- renders a panicking handler as a 500 error envelope
pub fn apply_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-app-name"),
                HeaderValue::from_static(APP_NAME),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            ))
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
