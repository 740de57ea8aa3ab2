//! Repository for the `cards` table.
//!
//! Cards are always created, edited, and listed in the context of a
//! specific showcase; every listing is ordered `(order_index, id)`.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::card::{Card, CardSearchHit, CardWithLogo, CreateCard, UpdateCard};
use crate::models::page::Page;

const COLUMNS: &str = "id, showcase_id, title, price, rate_line, age_line, btn_text, \
     btn_url, fine_print, logo_id, order_index, active, created_at, updated_at";

/// Maximum autocomplete results returned by [`CardRepo::search`].
const SEARCH_LIMIT: i64 = 20;

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card owned by `showcase_id`.
    pub async fn create(
        pool: &PgPool,
        showcase_id: DbId,
        input: &CreateCard,
    ) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards \
                (showcase_id, title, price, rate_line, age_line, btn_text, btn_url, \
                 fine_print, logo_id, order_index, active) \
             VALUES ($1, $2, COALESCE($3, 0), \
                 COALESCE($4, '0% per day'), COALESCE($5, '18+ only'), \
                 COALESCE($6, 'Apply now'), COALESCE($7, ''), \
                 COALESCE($8, 'A decision is made within minutes.'), \
                 $9, COALESCE($10, 0), COALESCE($11, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(showcase_id)
            .bind(&input.title)
            .bind(input.price)
            .bind(&input.rate_line)
            .bind(&input.age_line)
            .bind(&input.btn_text)
            .bind(&input.btn_url)
            .bind(&input.fine_print)
            .bind(input.logo_id)
            .bind(input.order_index)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a card by ID regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a card by ID scoped to its owning showcase.
    pub async fn find_in_showcase(
        pool: &PgPool,
        showcase_id: DbId,
        id: DbId,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1 AND showcase_id = $2");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(showcase_id)
            .fetch_optional(pool)
            .await
    }

    /// List a showcase's cards in `(order_index, id)` order.
    pub async fn list_for_showcase(
        pool: &PgPool,
        showcase_id: DbId,
        include_inactive: bool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards \
             WHERE showcase_id = $1 AND ($2 OR active) \
             ORDER BY order_index, id \
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Card>(&query)
            .bind(showcase_id)
            .bind(include_inactive)
            .bind(per_page + 1)
            .bind((page - 1) * per_page)
            .fetch_all(pool)
            .await?;
        Ok(Page::from_overfetch(rows, page, per_page))
    }

    /// List a showcase's active cards joined with logo asset paths, in
    /// rendering order. Used by the public resolution path.
    pub async fn list_active_with_logo(
        pool: &PgPool,
        showcase_id: DbId,
    ) -> Result<Vec<CardWithLogo>, sqlx::Error> {
        let query = format!(
            "SELECT c.{}, l.image_path AS logo_path \
             FROM cards c \
             LEFT JOIN logos l ON l.id = c.logo_id \
             WHERE c.showcase_id = $1 AND c.active \
             ORDER BY c.order_index, c.id",
            COLUMNS.replace(", ", ", c.")
        );
        sqlx::query_as::<_, CardWithLogo>(&query)
            .bind(showcase_id)
            .fetch_all(pool)
            .await
    }

    /// Update a card. Only non-`None` fields are applied. Scoped to the
    /// owning showcase; returns `None` when no such card exists there.
    pub async fn update(
        pool: &PgPool,
        showcase_id: DbId,
        id: DbId,
        input: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET \
                title = COALESCE($3, title), \
                price = COALESCE($4, price), \
                rate_line = COALESCE($5, rate_line), \
                age_line = COALESCE($6, age_line), \
                btn_text = COALESCE($7, btn_text), \
                btn_url = COALESCE($8, btn_url), \
                fine_print = COALESCE($9, fine_print), \
                logo_id = COALESCE($10, logo_id), \
                order_index = COALESCE($11, order_index), \
                active = COALESCE($12, active), \
                updated_at = now() \
             WHERE id = $1 AND showcase_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(showcase_id)
            .bind(&input.title)
            .bind(input.price)
            .bind(&input.rate_line)
            .bind(&input.age_line)
            .bind(&input.btn_text)
            .bind(&input.btn_url)
            .bind(&input.fine_print)
            .bind(input.logo_id)
            .bind(input.order_index)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Flip a card's visibility flag. Returns the updated row, or `None`
    /// when the card does not exist under that showcase.
    pub async fn toggle_active(
        pool: &PgPool,
        showcase_id: DbId,
        id: DbId,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET active = NOT active, updated_at = now() \
             WHERE id = $1 AND showcase_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(showcase_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a card scoped to its showcase. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, showcase_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND showcase_id = $2")
            .bind(id)
            .bind(showcase_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Title autocomplete: prefix matches rank before substring matches.
    pub async fn search(pool: &PgPool, q: &str) -> Result<Vec<CardSearchHit>, sqlx::Error> {
        let q = q.trim();
        if q.is_empty() {
            return Ok(Vec::new());
        }
        let escaped = super::showcase_repo::escape_like(q);
        sqlx::query_as::<_, CardSearchHit>(
            "SELECT id, title AS label FROM cards \
             WHERE showcase_id IS NOT NULL AND title ILIKE '%' || $1 || '%' \
             ORDER BY (title ILIKE $1 || '%') DESC, title ASC, id ASC \
             LIMIT $2",
        )
        .bind(&escaped)
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .await
    }
}
