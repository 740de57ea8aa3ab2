//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&per_page=`).
///
/// Values are clamped in `vitrine_db::models::page`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Free-text query for the autocomplete search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Card listing parameters: pagination plus an `include_inactive` flag.
#[derive(Debug, Deserialize)]
pub struct CardListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Optional host override for the admin preview endpoint.
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub host: Option<String>,
}
