use crate::error::ApiError;
use crate::models::ListQuery;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use serde_json::{Map, Value as JsonValue};

pub const EXPECTED_JSON: &str = "Expected application/json";
pub const MALFORMED_JSON: &str = "Malformed JSON";
pub const EXPECTED_OBJECT: &str = "Expected a JSON object";
pub const UNREADABLE_BODY: &str = "Request body could not be read";
pub const INVALID_QUERY: &str = "Invalid query string";

/// JSON object extracted from the request body
///
/// Rejections are classified as [`ApiError::BadRequest`], with a distinct
/// message for a wrong content type, an unparsable body and a non-object
/// value.
#[derive(Debug)]
pub struct JsonPayload(pub Map<String, JsonValue>);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(ApiError::BadRequest(EXPECTED_JSON.to_string()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Failed to read request body: {}", rejection.body_text());
                ApiError::BadRequest(UNREADABLE_BODY.to_string())
            })?;

        let value: JsonValue = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::BadRequest(MALFORMED_JSON.to_string()))?;

        match value {
            JsonValue::Object(map) => Ok(JsonPayload(map)),
            _ => Err(ApiError::BadRequest(EXPECTED_OBJECT.to_string())),
        }
    }
}

/// Item identifier taken from the `{id}` path segment
///
/// A segment that cannot be decoded (e.g. invalid UTF-8) cannot name a
/// stored item, so it is reported as [`ApiError::NotFound`].
#[derive(Debug)]
pub struct ItemId(pub String);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ItemId(id)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!("Undecodable item id: {}", err.body_text());
                Err(ApiError::NotFound)
            }
            Err(rejection) => Err(ApiError::Internal(anyhow::anyhow!(
                "item route without id parameter: {}",
                rejection.body_text()
            ))),
        }
    }
}

/// Query parameters for the list endpoint
///
/// Only the first `q` counts, and unknown parameters are ignored.
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                ApiError::BadRequest(INVALID_QUERY.to_string())
            })?;

        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);

        Ok(ListQuery { q })
    }
}

/// `application/json` or any `application/*+json`, ignoring parameters
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
