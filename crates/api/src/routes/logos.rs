//! Route definitions for logo assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::logo;
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logos", get(logo::list).post(logo::create))
        .route(
            "/logos/{id}",
            get(logo::get_by_id).put(logo::update).delete(logo::delete),
        )
}
