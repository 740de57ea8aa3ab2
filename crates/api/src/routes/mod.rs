pub mod health;
pub mod logos;
pub mod meta;
pub mod public;
pub mod showcases;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` management route tree (bearer-token gated in the
/// handlers).
///
/// ```text
/// /showcases                          list, create
/// /showcases/search                   autocomplete
/// /showcases/{id}                     get, update, delete
/// /showcases/{id}/duplicate           deep copy (POST)
/// /showcases/{id}/preview             preview-mode resolution (id or slug)
/// /showcases/{id}/cards               list, create
/// /showcases/{id}/cards/{card_id}     get, update, delete
/// /showcases/{id}/cards/{card_id}/toggle  flip visibility (POST)
/// /cards/search                       autocomplete
/// /logos                              list, create
/// /logos/{id}                         get, update, delete
/// /domains                            selectable domain choices
/// /themes                             discovered themes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(showcases::router())
        .merge(logos::router())
        .merge(meta::router())
}
