//! Showcase lookup keys.
//!
//! An inbound path carries at most one key segment which is either a
//! numeric id or a slug. The key is parsed exactly once at the request
//! boundary; everything downstream switches on the enum instead of
//! re-deriving the lookup mode.

use crate::types::DbId;

/// How a request addresses a showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// No key segment: root/home resolution for the host.
    Root,
    /// All-digits key: direct id lookup.
    Id(DbId),
    /// Anything else: slug lookup.
    Slug(String),
}

impl LookupKey {
    /// Parse an optional path segment into a lookup key.
    ///
    /// All-digit segments become [`LookupKey::Id`]; digits that overflow
    /// `i64` fall back to a slug (which will simply not match anything).
    pub fn parse(key: Option<&str>) -> Self {
        let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) else {
            return LookupKey::Root;
        };
        if key.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = key.parse::<DbId>() {
                return LookupKey::Id(id);
            }
        }
        LookupKey::Slug(key.to_ascii_lowercase())
    }
}

/// Host-matching strictness for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Public traffic: the resolved showcase must claim the request host.
    Public,
    /// Admin preview: host matching is relaxed so operators can check a
    /// showcase before DNS points at it. Must be explicitly gated.
    Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_key_is_root() {
        assert_eq!(LookupKey::parse(None), LookupKey::Root);
        assert_eq!(LookupKey::parse(Some("")), LookupKey::Root);
        assert_eq!(LookupKey::parse(Some("  ")), LookupKey::Root);
    }

    #[test]
    fn digits_parse_as_id() {
        assert_eq!(LookupKey::parse(Some("42")), LookupKey::Id(42));
    }

    #[test]
    fn non_digits_parse_as_lowercased_slug() {
        assert_eq!(
            LookupKey::parse(Some("Promo-1")),
            LookupKey::Slug("promo-1".to_string())
        );
    }

    #[test]
    fn overflowing_digits_fall_back_to_slug() {
        let huge = "99999999999999999999999999";
        assert_eq!(
            LookupKey::parse(Some(huge)),
            LookupKey::Slug(huge.to_string())
        );
    }
}
