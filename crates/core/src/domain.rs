//! Domain name normalization (unicode ↔ punycode).
//!
//! Showcase domain lists are free text entered by operators and may mix
//! unicode (`пример.рф`) and ASCII/punycode (`xn--e1afmkfd.xn--p1ai`)
//! forms. All comparisons go through [`canonical`] so the two forms
//! match. IDNA conversion is best-effort: malformed input is passed
//! through unchanged, never raised as an error.

use std::net::Ipv4Addr;

use serde::Serialize;

/// Outcome of a unicode → ASCII domain conversion.
///
/// The external contract collapses both variants to a plain string, but
/// keeping the fallback explicit makes the pass-through branch testable
/// instead of hiding it in a swallowed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostConversion {
    /// IDNA encoding succeeded.
    Converted(String),
    /// Input was malformed or already plain; returned unchanged.
    Unchanged(String),
}

impl HostConversion {
    /// Collapse to the plain string callers actually store and compare.
    pub fn into_string(self) -> String {
        match self {
            HostConversion::Converted(s) | HostConversion::Unchanged(s) => s,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HostConversion::Converted(s) | HostConversion::Unchanged(s) => s,
        }
    }
}

/// A selectable domain for the management UI: punycode value plus a
/// human-readable unicode label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainChoice {
    pub value: String,
    pub label: String,
}

/// Convert a domain to its internationalized ASCII (punycode) form.
///
/// `localhost` and bare IPv4 literals are not internationalizable and
/// come back as [`HostConversion::Unchanged`], as does anything IDNA
/// rejects.
pub fn to_ascii(domain: &str) -> HostConversion {
    let domain = domain.trim();
    if is_plain_host(domain) {
        return HostConversion::Unchanged(domain.to_string());
    }
    match idna::domain_to_ascii(domain) {
        Ok(ascii) if !ascii.is_empty() => HostConversion::Converted(ascii),
        _ => HostConversion::Unchanged(domain.to_string()),
    }
}

/// Convert an ASCII/punycode domain back to a human-readable unicode
/// label. Falls back to the input when decoding fails.
pub fn to_label(ascii_domain: &str) -> String {
    let ascii_domain = ascii_domain.trim();
    if is_plain_host(ascii_domain) {
        return ascii_domain.to_string();
    }
    let (unicode, result) = idna::domain_to_unicode(ascii_domain);
    match result {
        Ok(()) if !unicode.is_empty() => unicode,
        _ => ascii_domain.to_string(),
    }
}

/// The canonical form used for every domain comparison: punycode,
/// ASCII-lowercased. Never compare raw unicode to raw ASCII.
pub fn canonical(domain: &str) -> String {
    to_ascii(domain).into_string().to_ascii_lowercase()
}

/// Canonicalize an HTTP Host header: strip the port, then [`canonical`].
pub fn canonical_host(host_header: &str) -> String {
    let host = host_header
        .split(':')
        .next()
        .unwrap_or(host_header)
        .trim();
    canonical(host)
}

/// `localhost` and bare IPv4 literals are recognized as
/// non-internationalized hosts. They pass through conversion unchanged
/// and are excluded from any user-facing domain picker.
pub fn is_plain_host(domain: &str) -> bool {
    domain == "localhost" || domain.parse::<Ipv4Addr>().is_ok()
}

/// Parse a stored `domains` field into individual entries.
///
/// Splits on commas and newlines, trims whitespace, drops blanks. Does
/// NOT canonicalize; callers normalize each entry as needed.
pub fn split_domains(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a free-text domain list into its storage form: trimmed,
/// deduplicated, sorted, newline-joined.
pub fn normalize_domain_lines(text: &str) -> String {
    let mut entries = split_domains(text);
    entries.sort();
    entries.dedup();
    entries.join("\n")
}

/// Whether a showcase's stored `domains` text claims the given canonical
/// host. Each stored entry is canonicalized independently so mixed
/// unicode/punycode storage both match.
pub fn domains_contain(stored: &str, host: &str) -> bool {
    split_domains(stored).iter().any(|d| canonical(d) == host)
}

/// Build the selectable-domain list for the management UI from the
/// configured allow-list: value is punycode, label is unicode, plain
/// hosts (localhost, IPv4) are skipped.
pub fn domain_choices(allowed: &[String]) -> Vec<DomainChoice> {
    allowed
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty() && !is_plain_host(d))
        .map(|d| {
            let value = to_ascii(d).into_string();
            let label = to_label(&value);
            DomainChoice { value, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_domain_converts_to_punycode() {
        assert_eq!(
            to_ascii("пример.рф"),
            HostConversion::Converted("xn--e1afmkfd.xn--p1ai".to_string())
        );
    }

    #[test]
    fn ascii_domain_stays_ascii() {
        assert_eq!(canonical("example.com"), "example.com");
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = canonical("пример.рф");
        let twice = canonical(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn label_round_trips_punycode() {
        assert_eq!(to_label("xn--e1afmkfd.xn--p1ai"), "пример.рф");
    }

    #[test]
    fn malformed_input_passes_through() {
        let weird = "exa mple..";
        match to_ascii(weird) {
            HostConversion::Unchanged(s) => assert_eq!(s, weird),
            // Some IDNA profiles accept surprising input; either way the
            // string must come back non-empty.
            HostConversion::Converted(s) => assert!(!s.is_empty()),
        }
    }

    #[test]
    fn localhost_and_ipv4_are_plain() {
        assert!(is_plain_host("localhost"));
        assert!(is_plain_host("127.0.0.1"));
        assert!(!is_plain_host("example.com"));
        assert_eq!(to_ascii("localhost"), HostConversion::Unchanged("localhost".to_string()));
    }

    #[test]
    fn canonical_host_strips_port_and_lowercases() {
        assert_eq!(canonical_host("Example.COM:8080"), "example.com");
        assert_eq!(canonical_host("localhost:3000"), "localhost");
    }

    #[test]
    fn split_domains_handles_commas_newlines_and_blanks() {
        let parsed = split_domains("a.com, b.com\n\n  c.com  ,");
        assert_eq!(parsed, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn normalize_domain_lines_sorts_and_dedupes() {
        assert_eq!(
            normalize_domain_lines("b.com\na.com,b.com"),
            "a.com\nb.com"
        );
    }

    #[test]
    fn mixed_storage_forms_both_match() {
        let host = canonical_host("пример.рф");
        assert!(domains_contain("xn--e1afmkfd.xn--p1ai", &host));
        assert!(domains_contain("пример.рф", &host));
        assert!(!domains_contain("other.com", &host));
    }

    #[test]
    fn domain_choices_skip_plain_hosts() {
        let allowed = vec![
            "localhost".to_string(),
            "127.0.0.1".to_string(),
            "пример.рф".to_string(),
            "example.com".to_string(),
        ];
        let choices = domain_choices(&allowed);
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].value, "xn--e1afmkfd.xn--p1ai");
        assert_eq!(choices[0].label, "пример.рф");
        assert_eq!(choices[1].value, "example.com");
        assert_eq!(choices[1].label, "example.com");
    }
}
