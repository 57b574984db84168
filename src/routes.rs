// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const ECHO: &str = "/api/echo";
pub const TIME: &str = "/api/time";
pub const ITEMS: &str = "/api/items";
pub const ITEM: &str = "/api/items/{id}";
pub const API_ANY: &str = "/api/{*path}";
pub const OPENAPI: &str = "/api-docs/openapi.json";
