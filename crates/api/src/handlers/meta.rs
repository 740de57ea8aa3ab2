//! Configuration-derived lookups for the management UI: selectable
//! domains and discovered themes.

use axum::extract::State;
use axum::Json;
use vitrine_core::domain::{self, DomainChoice};
use vitrine_core::theme::ThemeEntry;

use crate::error::AppResult;
use crate::middleware::auth::Admin;
use crate::state::AppState;

/// GET /api/v1/domains -- the domain picker choices from the configured
/// allow-list: punycode value, unicode label, plain hosts excluded.
pub async fn domains(
    _admin: Admin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DomainChoice>>> {
    Ok(Json(domain::domain_choices(&state.config.domains_allowed)))
}

/// GET /api/v1/themes -- themes discovered at startup.
pub async fn themes(
    _admin: Admin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ThemeEntry>>> {
    Ok(Json(state.themes.as_ref().clone()))
}
