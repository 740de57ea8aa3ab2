//! Slug derivation and validation.
//!
//! Slugs are the URL path segment a showcase answers to. They contain
//! only `[a-z0-9_-]`, are at most [`MAX_SLUG_LEN`] characters, and are
//! never empty after a successful save: when the operator omits one it
//! is derived from the showcase name.

use crate::error::CoreError;

/// Maximum stored slug length.
pub const MAX_SLUG_LEN: usize = 50;

/// Slug that answers the root path of a domain. When several showcases
/// share a host, resolution with no key prefers this one.
pub const ROOT_SLUG: &str = "main";

/// Path segments claimed by the management surface; a showcase slug may
/// not shadow them.
pub const RESERVED_SLUGS: &[&str] = &["add", "logos", "api", "health"];

/// Derive a slug from free text: lowercase, runs of characters outside
/// `[a-z0-9_-]` collapse to a single hyphen, leading/trailing `-`/`_`
/// stripped. May return an empty string for input with no usable
/// characters.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' | '-' | '_' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            _ => pending_hyphen = true,
        }
    }

    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    slug.trim_matches(['-', '_']).to_string()
}

/// Pick the slug for a save: an explicit slug is slugified as-is, an
/// omitted one is derived from the display name.
pub fn slug_or_from_name(slug: Option<&str>, name: &str) -> String {
    match slug.map(str::trim) {
        Some(s) if !s.is_empty() => slugify(s),
        _ => slugify(name),
    }
}

/// Validate a final slug before it is persisted.
pub fn validate(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation(
            "Slug is empty and could not be derived from the name".to_string(),
        ));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug exceeds {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' contains characters outside [a-z0-9_-]"
        )));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' is reserved"
        )));
    }
    Ok(())
}

/// Derive and validate the slug for a save in one step.
///
/// This is the base slug only; the persistence layer appends numeric
/// suffixes until it is unique.
pub fn prepare(slug: Option<&str>, name: &str) -> Result<String, CoreError> {
    let slug = slug_or_from_name(slug, name);
    validate(&slug)?;
    Ok(slug)
}

/// Candidate slug for the `n`-th uniqueness retry: `base` for `n == 0`,
/// then `base-2`, `base-3`, ...
pub fn numbered(base: &str, n: u32) -> String {
    if n == 0 {
        base.to_string()
    } else {
        format!("{base}-{}", n + 1)
    }
}

/// Candidate slug for the `n`-th duplication attempt: `base-copy`, then
/// `base-copy2`, `base-copy3`, ...
pub fn copy_candidate(base: &str, n: u32) -> String {
    if n == 0 {
        format!("{base}-copy")
    } else {
        format!("{base}-copy{}", n + 1)
    }
}
