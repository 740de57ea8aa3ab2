//! Route definitions for showcases and their cards.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{card, showcase};
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/showcases", get(showcase::list).post(showcase::create))
        .route("/showcases/search", get(showcase::search))
        .route(
            "/showcases/{id}",
            get(showcase::get_by_id)
                .put(showcase::update)
                .delete(showcase::delete),
        )
        .route("/showcases/{id}/duplicate", post(showcase::duplicate))
        .route("/showcases/{id}/preview", get(showcase::preview))
        .route(
            "/showcases/{id}/cards",
            get(card::list).post(card::create),
        )
        .route(
            "/showcases/{id}/cards/{card_id}",
            get(card::get_by_id).put(card::update).delete(card::delete),
        )
        .route("/showcases/{id}/cards/{card_id}/toggle", post(card::toggle))
        .route("/cards/search", get(card::search))
}
