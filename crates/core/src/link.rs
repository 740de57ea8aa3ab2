//! Outbound link composition.
//!
//! A card's `btn_url` is raw operator input (possibly schemeless) and a
//! showcase carries an `extra_params` query fragment that must be merged
//! into every outbound link. Composition is idempotent: merging the same
//! params twice overwrites rather than duplicates.

use url::Url;

/// Compose a card's final outbound link.
///
/// - Blank input stays blank (the call-to-action is suppressed).
/// - A missing `http(s)://` scheme gets `https://` prepended after
///   stripping any leading slash.
/// - Input that still has no host after scheming is returned as-is; bad
///   operator input degrades, it does not error.
/// - `extra_params` entries overwrite same-named existing query keys;
///   scheme, host, path, and fragment are preserved.
pub fn compose(raw_url: &str, extra_params: &str) -> String {
    let raw_url = raw_url.trim();
    if raw_url.is_empty() {
        return String::new();
    }

    let schemed = ensure_scheme(raw_url);

    let mut parsed = match Url::parse(&schemed) {
        Ok(url) if url.host_str().is_some() => url,
        // No network location: degraded result, caller decides.
        _ => return schemed,
    };

    let merged = merge_params(&parsed, extra_params);
    if merged.is_empty() {
        parsed.set_query(None);
    } else {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&merged)
            .finish();
        parsed.set_query(Some(&query));
    }

    parsed.to_string()
}

/// Prepend `https://` when the input has no recognized scheme.
fn ensure_scheme(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw.trim_start_matches('/'))
    }
}

/// Merge the URL's existing query pairs with `extra_params`.
///
/// Both sides parse as ordinary query strings: keys stay in first-seen
/// order, a repeated key keeps its last-seen value, and extra entries
/// overwrite existing ones in place.
fn merge_params(url: &Url, extra_params: &str) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = Vec::new();

    let existing = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned()));
    let extra = extra_params.trim().trim_start_matches(['?', '&']);
    let extra = url::form_urlencoded::parse(extra.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .filter(|(k, _)| !k.is_empty());

    for (key, value) in existing.chain(extra) {
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => merged.push((key, value)),
        }
    }

    merged
}
