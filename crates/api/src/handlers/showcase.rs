//! Handlers for the `/showcases` management resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::lookup::{LookupKey, ResolveMode};
use vitrine_core::slug;
use vitrine_core::types::DbId;
use vitrine_db::models::page::{clamp_page, clamp_per_page, Page};
use vitrine_db::models::showcase::{CreateShowcase, Showcase, ShowcaseSearchHit, UpdateShowcase};
use vitrine_db::repositories::ShowcaseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::public::{self, RenderContext};
use crate::middleware::auth::Admin;
use crate::query::{PageParams, PreviewParams, SearchParams};
use crate::state::AppState;

/// GET /api/v1/showcases
pub async fn list(
    _admin: Admin,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Showcase>>> {
    let page = clamp_page(params.page);
    let per_page = clamp_per_page(params.per_page);
    let result = ShowcaseRepo::list_page(&state.pool, page, per_page).await?;
    Ok(Json(result))
}

/// POST /api/v1/showcases
pub async fn create(
    _admin: Admin,
    State(state): State<AppState>,
    Json(input): Json<CreateShowcase>,
) -> AppResult<(StatusCode, Json<Showcase>)> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()).into());
    }
    let slug_base = slug::prepare(input.slug.as_deref(), &input.name)?;
    let showcase = ShowcaseRepo::create(&state.pool, &input, &slug_base).await?;
    Ok((StatusCode::CREATED, Json(showcase)))
}

/// GET /api/v1/showcases/{id}
pub async fn get_by_id(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Showcase>> {
    let showcase = ShowcaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Showcase", id })?;
    Ok(Json(showcase))
}

/// PUT /api/v1/showcases/{id}
///
/// Omitting `slug` keeps the current one; supplying it (even reworded)
/// revalidates and re-uniquifies it against every other showcase. A
/// blanked slug is re-derived from the incoming name, falling back to
/// the stored one.
pub async fn update(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShowcase>,
) -> AppResult<Json<Showcase>> {
    let slug_base = match input.slug.as_deref() {
        Some(raw) => {
            let name = match input.name.clone() {
                Some(name) => name,
                None => {
                    ShowcaseRepo::find_by_id(&state.pool, id)
                        .await?
                        .ok_or(CoreError::NotFound { entity: "Showcase", id })?
                        .name
                }
            };
            Some(slug::prepare(Some(raw), &name)?)
        }
        None => None,
    };
    let showcase = ShowcaseRepo::update(&state.pool, id, &input, slug_base.as_deref())
        .await?
        .ok_or(CoreError::NotFound { entity: "Showcase", id })?;
    Ok(Json(showcase))
}

/// DELETE /api/v1/showcases/{id} -- cascades to the showcase's cards.
pub async fn delete(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ShowcaseRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound { entity: "Showcase", id }.into())
    }
}

/// POST /api/v1/showcases/{id}/duplicate
pub async fn duplicate(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Showcase>)> {
    let copy = ShowcaseRepo::duplicate(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Showcase", id })?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// GET /api/v1/showcases/search?q=
pub async fn search(
    _admin: Admin,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ShowcaseSearchHit>>> {
    let hits = ShowcaseRepo::search(&state.pool, &params.q).await?;
    Ok(Json(hits))
}

/// GET /api/v1/showcases/{key}/preview?host=
///
/// Preview-mode resolution: lets an operator check a showcase by id or
/// slug before DNS points at it. Host matching is relaxed, which is why
/// this lives behind the admin gate instead of on the public routes.
pub async fn preview(
    _admin: Admin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<PreviewParams>,
) -> AppResult<Json<RenderContext>> {
    let host = params.host.unwrap_or_default();
    let lookup = LookupKey::parse(Some(&key));

    let showcase = ShowcaseRepo::resolve(&state.pool, &host, &lookup, ResolveMode::Preview)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No showcase for key '{key}'")))?;

    let context = public::build_context(&state, showcase).await?;
    Ok(Json(context))
}
