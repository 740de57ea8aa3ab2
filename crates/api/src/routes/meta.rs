//! Route definitions for configuration-derived lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/domains", get(meta::domains))
        .route("/themes", get(meta::themes))
}
