//! Logo models and DTOs.
//!
//! Logos are independent assets; a card holds a weak reference that is
//! nulled when the logo is deleted. Upload and image storage are
//! outside this crate -- `image_path` is an opaque asset reference.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::DbId;

use super::Timestamp;

/// A row from the `logos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Logo {
    pub id: DbId,
    pub name: String,
    pub image_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a logo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLogo {
    pub name: String,
    pub image_path: String,
}

/// DTO for partially updating a logo.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLogo {
    pub name: Option<String>,
    pub image_path: Option<String>,
}
