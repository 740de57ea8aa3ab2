//! Card models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::DbId;

use super::Timestamp;

/// A row from the `cards` table: one offer tile on a showcase.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    /// Owning showcase; orphaned cards are excluded from every listing.
    pub showcase_id: Option<DbId>,
    pub title: String,
    pub price: i64,
    pub rate_line: String,
    pub age_line: String,
    pub btn_text: String,
    /// Raw call-to-action URL, possibly schemeless; composed at render time.
    pub btn_url: String,
    pub fine_print: String,
    pub logo_id: Option<DbId>,
    pub order_index: i32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A card joined with its logo's asset path, for rendering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CardWithLogo {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub card: Card,
    pub logo_path: Option<String>,
}

/// DTO for creating a card within a showcase.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCard {
    pub title: String,
    pub price: Option<i64>,
    pub rate_line: Option<String>,
    pub age_line: Option<String>,
    pub btn_text: Option<String>,
    pub btn_url: Option<String>,
    pub fine_print: Option<String>,
    pub logo_id: Option<DbId>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
}

/// DTO for partially updating a card.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub price: Option<i64>,
    pub rate_line: Option<String>,
    pub age_line: Option<String>,
    pub btn_text: Option<String>,
    pub btn_url: Option<String>,
    pub fine_print: Option<String>,
    pub logo_id: Option<DbId>,
    pub order_index: Option<i32>,
    pub active: Option<bool>,
}

/// A ranked autocomplete hit for the card search endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CardSearchHit {
    pub id: DbId,
    pub label: String,
}
