//! Theme selection and discovery.
//!
//! A showcase's `template` field names a theme directory. Resolution
//! produces an ordered list of template paths: the themed path first,
//! then the base template. The renderer (an external collaborator) must
//! fall back to the next candidate only on a missing-template condition.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// Template rendered when a showcase has no theme.
pub const BASE_TEMPLATE: &str = "index.html";

/// Sentinel value equivalent to an empty `template` field.
pub const DEFAULT_THEME: &str = "default";

/// A discovered theme: directory name plus human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeEntry {
    pub name: String,
    pub label: String,
}

/// Ordered template paths to try for a showcase's theme.
pub fn template_candidates(template: &str) -> Vec<String> {
    let template = template.trim();
    if template.is_empty() || template == DEFAULT_THEME {
        vec![BASE_TEMPLATE.to_string()]
    } else {
        vec![
            format!("themes/{template}/{BASE_TEMPLATE}"),
            BASE_TEMPLATE.to_string(),
        ]
    }
}

/// List available themes: sorted subdirectories of the themes root,
/// skipping names that start with `_` (partials and shared includes).
///
/// A missing or unreadable root yields an empty list; theme discovery
/// runs once at startup and an absent directory just means no themes.
pub fn discover_themes(root: &Path) -> Vec<ThemeEntry> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !name.starts_with('_'))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let label = theme_label(&name);
            ThemeEntry { name, label }
        })
        .collect()
}

/// Human label for a theme directory name; unknown themes use the raw
/// directory name.
fn theme_label(name: &str) -> String {
    match name {
        "green" => "Green".to_string(),
        "blue" => "Blue".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn empty_template_never_tries_a_themed_path() {
        assert_eq!(template_candidates(""), vec![BASE_TEMPLATE]);
        assert_eq!(template_candidates("  "), vec![BASE_TEMPLATE]);
    }

    #[test]
    fn default_sentinel_equals_empty() {
        assert_eq!(template_candidates("default"), vec![BASE_TEMPLATE]);
    }

    #[test]
    fn themed_path_comes_before_base() {
        assert_eq!(
            template_candidates("green"),
            vec!["themes/green/index.html", "index.html"]
        );
    }

    #[test]
    fn discovery_lists_sorted_dirs_and_skips_underscore() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("green")).unwrap();
        fs::create_dir(root.path().join("blue")).unwrap();
        fs::create_dir(root.path().join("_partials")).unwrap();
        fs::write(root.path().join("stray.txt"), "not a theme").unwrap();

        let themes = discover_themes(root.path());
        assert_eq!(
            themes,
            vec![
                ThemeEntry { name: "blue".to_string(), label: "Blue".to_string() },
                ThemeEntry { name: "green".to_string(), label: "Green".to_string() },
            ]
        );
    }

    #[test]
    fn unknown_theme_uses_raw_name_as_label() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("noir")).unwrap();

        let themes = discover_themes(root.path());
        assert_eq!(themes[0].label, "noir");
    }

    #[test]
    fn missing_root_yields_no_themes() {
        assert!(discover_themes(Path::new("/nonexistent/themes")).is_empty());
    }
}
