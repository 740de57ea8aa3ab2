//! Showcase models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::DbId;

use super::Timestamp;

/// A row from the `showcases` table: one tenant storefront bound to a
/// set of domains.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Showcase {
    pub id: DbId,
    pub name: String,
    /// URL path segment; never empty after a successful save.
    pub slug: String,
    /// Newline-delimited domain entries; may mix unicode and punycode.
    pub domains: String,
    /// Theme directory name; empty means the default template.
    pub template: String,
    /// Raw query-string fragment merged into every card's outbound link.
    pub extra_params: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a showcase. A missing slug is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShowcase {
    pub name: String,
    pub slug: Option<String>,
    /// Free-text domain list (commas and/or newlines); normalized on save.
    pub domains: Option<String>,
    pub template: Option<String>,
    pub extra_params: Option<String>,
}

/// DTO for partially updating a showcase.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShowcase {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub domains: Option<String>,
    pub template: Option<String>,
    pub extra_params: Option<String>,
}

/// A ranked autocomplete hit for the showcase search endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowcaseSearchHit {
    pub id: DbId,
    pub label: String,
}
