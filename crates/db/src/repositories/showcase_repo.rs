//! Repository for the `showcases` table.
//!
//! Hosts the domain-to-showcase resolution algorithm and showcase
//! duplication. Domain matching cannot happen in SQL because stored
//! entries mix unicode and punycode forms, so resolution loads the
//! candidate rows and filters through `vitrine_core::domain`. Traffic
//! is small-marketing-site scale; correctness over latency.

use sqlx::{PgPool, Postgres, Transaction};
use vitrine_core::domain;
use vitrine_core::lookup::{LookupKey, ResolveMode};
use vitrine_core::slug;
use vitrine_core::types::DbId;

use crate::models::page::Page;
use crate::models::showcase::{CreateShowcase, Showcase, ShowcaseSearchHit, UpdateShowcase};

const COLUMNS: &str = "id, name, slug, domains, template, extra_params, created_at, updated_at";

/// Maximum autocomplete results returned by [`ShowcaseRepo::search`].
const SEARCH_LIMIT: i64 = 20;

/// Provides CRUD, resolution, and duplication for showcases.
pub struct ShowcaseRepo;

impl ShowcaseRepo {
    /// Insert a new showcase.
    ///
    /// `slug_base` is the validated base slug (see `slug::prepare`); a
    /// numeric suffix is appended until it is unique. The domain list is
    /// normalized to its storage form.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShowcase,
        slug_base: &str,
    ) -> Result<Showcase, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unique = Self::unique_slug(&mut tx, slug_base, None).await?;
        let domains = domain::normalize_domain_lines(input.domains.as_deref().unwrap_or(""));

        let query = format!(
            "INSERT INTO showcases (name, slug, domains, template, extra_params) \
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, '')) \
             RETURNING {COLUMNS}"
        );
        let showcase = sqlx::query_as::<_, Showcase>(&query)
            .bind(&input.name)
            .bind(&unique)
            .bind(&domains)
            .bind(&input.template)
            .bind(&input.extra_params)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(showcase)
    }

    /// Find a showcase by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Showcase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM showcases WHERE id = $1");
        sqlx::query_as::<_, Showcase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a showcase by exact slug (slugs are stored lowercase).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Showcase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM showcases WHERE slug = $1");
        sqlx::query_as::<_, Showcase>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List showcases, most recently created first.
    pub async fn list_page(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Showcase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM showcases \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Showcase>(&query)
            .bind(per_page + 1)
            .bind((page - 1) * per_page)
            .fetch_all(pool)
            .await?;
        Ok(Page::from_overfetch(rows, page, per_page))
    }

    /// Update a showcase. Only non-`None` fields are applied.
    ///
    /// `slug_base` is `Some` when the caller changed the slug (already
    /// validated); uniqueness excludes the row being updated. A supplied
    /// domain list is re-normalized.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShowcase,
        slug_base: Option<&str>,
    ) -> Result<Option<Showcase>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unique = match slug_base {
            Some(base) => Some(Self::unique_slug(&mut tx, base, Some(id)).await?),
            None => None,
        };
        let domains = input.domains.as_deref().map(domain::normalize_domain_lines);

        let query = format!(
            "UPDATE showcases SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                domains = COALESCE($4, domains), \
                template = COALESCE($5, template), \
                extra_params = COALESCE($6, extra_params), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let showcase = sqlx::query_as::<_, Showcase>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&unique)
            .bind(&domains)
            .bind(&input.template)
            .bind(&input.extra_params)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(showcase)
    }

    /// Delete a showcase; owned cards cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM showcases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------------

    /// Resolve an inbound request to a showcase.
    ///
    /// `host` is the raw Host header. Candidates are showcases whose
    /// stored domain entries, canonicalized, contain the canonical host,
    /// ordered most-recently-created first.
    ///
    /// - [`LookupKey::Root`]: prefer the candidate whose slug is `main`,
    ///   else the most recent candidate.
    /// - [`LookupKey::Id`]: direct id lookup; in [`ResolveMode::Public`]
    ///   the row must also claim the host.
    /// - [`LookupKey::Slug`]: slug matches intersected with the host
    ///   candidates, most recent first; [`ResolveMode::Preview`] falls
    ///   back to any slug match when the intersection is empty.
    ///
    /// Pure read; `Ok(None)` maps to a 404 at the boundary.
    pub async fn resolve(
        pool: &PgPool,
        host: &str,
        key: &LookupKey,
        mode: ResolveMode,
    ) -> Result<Option<Showcase>, sqlx::Error> {
        let host = domain::canonical_host(host);
        tracing::debug!(%host, ?key, ?mode, "Resolving showcase");

        if let LookupKey::Id(id) = key {
            let found = Self::find_by_id(pool, *id).await?;
            return Ok(found.filter(|s| {
                mode == ResolveMode::Preview || domain::domains_contain(&s.domains, &host)
            }));
        }

        let query = format!("SELECT {COLUMNS} FROM showcases ORDER BY created_at DESC, id DESC");
        let all = sqlx::query_as::<_, Showcase>(&query).fetch_all(pool).await?;

        let candidates: Vec<&Showcase> = all
            .iter()
            .filter(|s| domain::domains_contain(&s.domains, &host))
            .collect();

        let resolved = match key {
            LookupKey::Root => candidates
                .iter()
                .find(|s| s.slug.eq_ignore_ascii_case(slug::ROOT_SLUG))
                .or_else(|| candidates.first())
                .copied(),
            LookupKey::Slug(wanted) => {
                let matched = candidates
                    .iter()
                    .find(|s| s.slug.eq_ignore_ascii_case(wanted))
                    .copied();
                match (matched, mode) {
                    (None, ResolveMode::Preview) => all
                        .iter()
                        .find(|s| s.slug.eq_ignore_ascii_case(wanted)),
                    (found, _) => found,
                }
            }
            LookupKey::Id(_) => unreachable!("handled above"),
        };

        Ok(resolved.cloned())
    }

    // -----------------------------------------------------------------------
    // Duplication
    // -----------------------------------------------------------------------

    /// Deep-copy a showcase and all its cards in a single transaction.
    ///
    /// The copy's slug is `{slug}-copy`, then `{slug}-copy2`, ... until
    /// unique. Cards are copied with all fields preserved (including
    /// `order_index` and `active`) and fresh identities. Any failure
    /// rolls back the whole copy. Returns `None` when the source does
    /// not exist.
    pub async fn duplicate(pool: &PgPool, id: DbId) -> Result<Option<Showcase>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM showcases WHERE id = $1");
        let Some(source) = sqlx::query_as::<_, Showcase>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let new_slug = {
            let mut n = 0;
            loop {
                let candidate = slug::copy_candidate(&source.slug, n);
                if !Self::slug_exists_tx(&mut tx, &candidate, None).await? {
                    break candidate;
                }
                n += 1;
            }
        };

        let insert = format!(
            "INSERT INTO showcases (name, slug, domains, template, extra_params) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let copy = sqlx::query_as::<_, Showcase>(&insert)
            .bind(&source.name)
            .bind(&new_slug)
            .bind(&source.domains)
            .bind(&source.template)
            .bind(&source.extra_params)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO cards \
                (showcase_id, title, price, rate_line, age_line, btn_text, btn_url, \
                 fine_print, logo_id, order_index, active) \
             SELECT $2, title, price, rate_line, age_line, btn_text, btn_url, \
                 fine_print, logo_id, order_index, active \
             FROM cards WHERE showcase_id = $1 \
             ORDER BY order_index, id",
        )
        .bind(source.id)
        .bind(copy.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(source_id = source.id, copy_id = copy.id, slug = %copy.slug, "Duplicated showcase");
        Ok(Some(copy))
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Name autocomplete: prefix matches rank before substring matches,
    /// bounded to [`SEARCH_LIMIT`] hits.
    pub async fn search(pool: &PgPool, q: &str) -> Result<Vec<ShowcaseSearchHit>, sqlx::Error> {
        let q = q.trim();
        if q.is_empty() {
            return Ok(Vec::new());
        }
        let escaped = escape_like(q);
        sqlx::query_as::<_, ShowcaseSearchHit>(
            "SELECT id, name AS label FROM showcases \
             WHERE name ILIKE '%' || $1 || '%' \
             ORDER BY (name ILIKE $1 || '%') DESC, name ASC, id ASC \
             LIMIT $2",
        )
        .bind(&escaped)
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Slug uniqueness
    // -----------------------------------------------------------------------

    async fn slug_exists_tx(
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM showcases WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(taken)
    }

    /// Append a numeric suffix to `base` until the slug is unique.
    async fn unique_slug(
        tx: &mut Transaction<'_, Postgres>,
        base: &str,
        exclude_id: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let mut n = 0;
        loop {
            let candidate = slug::numbered(base, n);
            if !Self::slug_exists_tx(tx, &candidate, exclude_id).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

/// Escape LIKE wildcards in user input so `%`/`_` match literally.
pub(crate) fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
