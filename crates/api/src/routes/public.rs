//! Public resolution routes (root-level, unauthenticated).
//!
//! `GET /` resolves the Host header alone; `GET /{key}` additionally
//! takes a numeric id or slug. Static root-level routes (`/health`)
//! take precedence over the `{key}` segment.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/{key}", get(public::by_key))
}
