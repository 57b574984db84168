use crate::store::Item;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Render a timestamp as ISO 8601 with microseconds and a `+00:00` offset
pub fn iso8601(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Request body for creating or renaming an item
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    pub name: String,
}

/// Single item as returned by the items endpoints
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            created_at: iso8601(item.created_at),
            updated_at: item.updated_at.map(iso8601),
        }
    }
}

/// Query parameters for list endpoint
#[derive(Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring to match against item names
    pub q: Option<String>,
}

/// Response type for list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub items: Vec<ItemResponse>,
    pub total: usize,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub app: String,
    pub now_utc: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimeResponse {
    pub now: String,
}

/// Response type for the echo endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EchoResponse {
    pub received: JsonValue,
    pub count: usize,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PreflightResponse {
    pub ok: bool,
}
