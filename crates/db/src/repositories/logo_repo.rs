//! Repository for the `logos` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::logo::{CreateLogo, Logo, UpdateLogo};

const COLUMNS: &str = "id, name, image_path, created_at, updated_at";

/// Provides CRUD operations for logos.
pub struct LogoRepo;

impl LogoRepo {
    /// Register a new logo asset.
    pub async fn create(pool: &PgPool, input: &CreateLogo) -> Result<Logo, sqlx::Error> {
        let query = format!(
            "INSERT INTO logos (name, image_path) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Logo>(&query)
            .bind(&input.name)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a logo by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Logo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logos WHERE id = $1");
        sqlx::query_as::<_, Logo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all logos by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Logo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM logos ORDER BY name, id");
        sqlx::query_as::<_, Logo>(&query).fetch_all(pool).await
    }

    /// Update a logo. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLogo,
    ) -> Result<Option<Logo>, sqlx::Error> {
        let query = format!(
            "UPDATE logos SET \
                name = COALESCE($2, name), \
                image_path = COALESCE($3, image_path), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Logo>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a logo. Cards referencing it are unlinked by the FK's
    /// SET NULL, never deleted. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM logos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
