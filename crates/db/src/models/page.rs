//! Pagination envelope shared by list repositories.

use serde::Serialize;

/// Default page size for admin list screens.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Maximum page size a caller may request.
pub const MAX_PER_PAGE: i64 = 100;

/// One page of results plus a has-next flag.
///
/// Repositories fetch `per_page + 1` rows and truncate, so `has_next`
/// costs no extra query.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Build a page from a `per_page + 1` over-fetch.
    pub fn from_overfetch(mut items: Vec<T>, page: i64, per_page: i64) -> Self {
        let has_next = items.len() as i64 > per_page;
        items.truncate(per_page as usize);
        Page { items, page, per_page, has_next }
    }
}

/// Clamp a requested page number to `1..`.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}
