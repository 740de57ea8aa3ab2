//! Public showcase resolution and render context.
//!
//! These routes are unauthenticated. The template-rendering engine is
//! an external collaborator: the handlers serve the resolved showcase,
//! the ordered template candidates, and the composed cards as JSON, and
//! the renderer tries the candidates in order, falling back only on a
//! missing-template condition.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use vitrine_core::link;
use vitrine_core::lookup::{LookupKey, ResolveMode};
use vitrine_core::theme;
use vitrine_core::types::DbId;
use vitrine_db::models::showcase::Showcase;
use vitrine_db::repositories::{CardRepo, ShowcaseRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A card prepared for rendering: outbound link composed with the
/// showcase's extra params, logo resolved to an asset path.
#[derive(Debug, Serialize)]
pub struct CardView {
    pub id: DbId,
    pub title: String,
    pub price: i64,
    pub rate_line: String,
    pub age_line: String,
    pub btn_text: String,
    /// `None` when the card has no usable link; the call-to-action is
    /// suppressed.
    pub btn_url: Option<String>,
    pub fine_print: String,
    pub logo_path: Option<String>,
}

/// Everything the external renderer needs for one page.
#[derive(Debug, Serialize)]
pub struct RenderContext {
    pub showcase: Showcase,
    /// Template identifiers to try in order; the first that exists wins.
    pub templates: Vec<String>,
    /// Active cards in `(order_index, id)` order.
    pub cards: Vec<CardView>,
}

/// GET / -- root resolution for the request host.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Json<RenderContext>> {
    resolve_and_render(&state, &headers, LookupKey::Root).await
}

/// GET /{key} -- keyed resolution (numeric id or slug) for the host.
pub async fn by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> AppResult<Json<RenderContext>> {
    resolve_and_render(&state, &headers, LookupKey::parse(Some(&key))).await
}

async fn resolve_and_render(
    state: &AppState,
    headers: &HeaderMap,
    key: LookupKey,
) -> AppResult<Json<RenderContext>> {
    let host = request_host(headers);
    let mode = if state.config.permissive_resolve {
        ResolveMode::Preview
    } else {
        ResolveMode::Public
    };

    let showcase = ShowcaseRepo::resolve(&state.pool, &host, &key, mode)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No showcase for host '{host}'")))?;

    let context = build_context(state, showcase).await?;
    Ok(Json(context))
}

/// Assemble the render context for a resolved showcase. Shared with the
/// admin preview endpoint.
pub async fn build_context(state: &AppState, showcase: Showcase) -> AppResult<RenderContext> {
    let cards = CardRepo::list_active_with_logo(&state.pool, showcase.id).await?;

    let cards = cards
        .into_iter()
        .map(|row| {
            let composed = link::compose(&row.card.btn_url, &showcase.extra_params);
            CardView {
                id: row.card.id,
                title: row.card.title,
                price: row.card.price,
                rate_line: row.card.rate_line,
                age_line: row.card.age_line,
                btn_text: row.card.btn_text,
                btn_url: (!composed.is_empty()).then_some(composed),
                fine_print: row.card.fine_print,
                logo_path: row.logo_path,
            }
        })
        .collect();

    let templates = theme::template_candidates(&showcase.template);

    Ok(RenderContext { showcase, templates, cards })
}

/// Request host, honoring `X-Forwarded-Host` from a fronting proxy
/// before the plain `Host` header.
fn request_host(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(axum::http::header::HOST))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
