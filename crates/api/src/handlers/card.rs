//! Handlers for cards, always scoped to a showcase:
//! `/showcases/{id}/cards[/{card_id}]`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::card::{Card, CardSearchHit, CreateCard, UpdateCard};
use vitrine_db::models::page::{clamp_page, clamp_per_page, Page};
use vitrine_db::repositories::{CardRepo, ShowcaseRepo};

use crate::error::AppResult;
use crate::middleware::auth::Admin;
use crate::query::{CardListParams, SearchParams};
use crate::state::AppState;

/// GET /api/v1/showcases/{id}/cards
pub async fn list(
    _admin: Admin,
    State(state): State<AppState>,
    Path(showcase_id): Path<DbId>,
    Query(params): Query<CardListParams>,
) -> AppResult<Json<Page<Card>>> {
    ensure_showcase(&state, showcase_id).await?;
    let page = clamp_page(params.page);
    let per_page = clamp_per_page(params.per_page);
    let result = CardRepo::list_for_showcase(
        &state.pool,
        showcase_id,
        params.include_inactive,
        page,
        per_page,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/v1/showcases/{id}/cards
pub async fn create(
    _admin: Admin,
    State(state): State<AppState>,
    Path(showcase_id): Path<DbId>,
    Json(input): Json<CreateCard>,
) -> AppResult<(StatusCode, Json<Card>)> {
    ensure_showcase(&state, showcase_id).await?;
    validate_card_fields(&input.title, input.price)?;
    let card = CardRepo::create(&state.pool, showcase_id, &input).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/v1/showcases/{id}/cards/{card_id}
pub async fn get_by_id(
    _admin: Admin,
    State(state): State<AppState>,
    Path((showcase_id, card_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Card>> {
    let card = CardRepo::find_in_showcase(&state.pool, showcase_id, card_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Card", id: card_id })?;
    Ok(Json(card))
}

/// PUT /api/v1/showcases/{id}/cards/{card_id}
pub async fn update(
    _admin: Admin,
    State(state): State<AppState>,
    Path((showcase_id, card_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCard>,
) -> AppResult<Json<Card>> {
    if let Some(title) = &input.title {
        validate_card_fields(title, input.price)?;
    } else {
        validate_card_fields("-", input.price)?;
    }
    let card = CardRepo::update(&state.pool, showcase_id, card_id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Card", id: card_id })?;
    Ok(Json(card))
}

/// POST /api/v1/showcases/{id}/cards/{card_id}/toggle
pub async fn toggle(
    _admin: Admin,
    State(state): State<AppState>,
    Path((showcase_id, card_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Card>> {
    let card = CardRepo::toggle_active(&state.pool, showcase_id, card_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Card", id: card_id })?;
    Ok(Json(card))
}

/// DELETE /api/v1/showcases/{id}/cards/{card_id}
pub async fn delete(
    _admin: Admin,
    State(state): State<AppState>,
    Path((showcase_id, card_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CardRepo::delete(&state.pool, showcase_id, card_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound { entity: "Card", id: card_id }.into())
    }
}

/// GET /api/v1/cards/search?q=
pub async fn search(
    _admin: Admin,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CardSearchHit>>> {
    let hits = CardRepo::search(&state.pool, &params.q).await?;
    Ok(Json(hits))
}

async fn ensure_showcase(state: &AppState, id: DbId) -> AppResult<()> {
    ShowcaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Showcase", id })?;
    Ok(())
}

fn validate_card_fields(title: &str, price: Option<i64>) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if price.is_some_and(|p| p < 0) {
        return Err(CoreError::Validation("Price must be non-negative".into()));
    }
    Ok(())
}
