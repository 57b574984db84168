use crate::error::ApiError;
use serde_json::{Map, Value as JsonValue};

pub const NAME_REQUIRED: &str = "Field 'name' is required and must be non-empty.";

/// Pull a trimmed, non-empty `name` out of an item payload
pub fn required_name(payload: &Map<String, JsonValue>) -> Result<String, ApiError> {
    payload
        .get("name")
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Validation(NAME_REQUIRED.to_string()))
}
