//! Bearer-token authentication extractor for the management surface.
//!
//! The admin surface is a single-operator tool, so the gate is one
//! configured token rather than a user store. Public resolution routes
//! take no extractor and stay unauthenticated.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};
use vitrine_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the admin bearer token.
///
/// Use as an extractor parameter in any handler that manages showcases,
/// cards, or logos:
///
/// ```ignore
/// async fn create(_admin: Admin, ...) -> AppResult<Json<Showcase>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Admin;

impl FromRequestParts<AppState> for Admin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !token_matches(token, &state.config.admin_token) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(Admin)
    }
}

/// Compare tokens by SHA-256 digest so the comparison does not leak a
/// byte-position timing signal on the raw token.
fn token_matches(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}
