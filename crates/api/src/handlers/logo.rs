//! Handlers for the `/logos` management resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::logo::{CreateLogo, Logo, UpdateLogo};
use vitrine_db::repositories::LogoRepo;

use crate::error::AppResult;
use crate::middleware::auth::Admin;
use crate::state::AppState;

/// GET /api/v1/logos
pub async fn list(_admin: Admin, State(state): State<AppState>) -> AppResult<Json<Vec<Logo>>> {
    let logos = LogoRepo::list(&state.pool).await?;
    Ok(Json(logos))
}

/// POST /api/v1/logos
pub async fn create(
    _admin: Admin,
    State(state): State<AppState>,
    Json(input): Json<CreateLogo>,
) -> AppResult<(StatusCode, Json<Logo>)> {
    if input.name.trim().is_empty() || input.image_path.trim().is_empty() {
        return Err(CoreError::Validation("Name and image path must not be empty".into()).into());
    }
    let logo = LogoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(logo)))
}

/// GET /api/v1/logos/{id}
pub async fn get_by_id(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Logo>> {
    let logo = LogoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Logo", id })?;
    Ok(Json(logo))
}

/// PUT /api/v1/logos/{id}
pub async fn update(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLogo>,
) -> AppResult<Json<Logo>> {
    let logo = LogoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Logo", id })?;
    Ok(Json(logo))
}

/// DELETE /api/v1/logos/{id} -- unlinks referencing cards, never
/// deletes them.
pub async fn delete(
    _admin: Admin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if LogoRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound { entity: "Logo", id }.into())
    }
}
