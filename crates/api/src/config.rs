use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields except `ADMIN_TOKEN` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bearer token gating the management surface. Required.
    pub admin_token: String,
    /// Selectable domains for the showcase editor, comma-separated.
    /// Not validated against DNS.
    pub domains_allowed: Vec<String>,
    /// Root directory scanned for theme subdirectories at startup.
    pub themes_dir: PathBuf,
    /// Relax host matching on public resolution so staging hosts work
    /// before DNS is configured. Never enable for production traffic.
    pub permissive_resolve: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_TOKEN`          | (required)                 |
    /// | `DOMAINS_ALLOWED`      | (empty)                    |
    /// | `THEMES_DIR`           | `templates/themes`         |
    /// | `PERMISSIVE_RESOLVE`   | `false`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_csv(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_token = std::env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set");

        let domains_allowed = split_csv(&std::env::var("DOMAINS_ALLOWED").unwrap_or_default());

        let themes_dir = PathBuf::from(
            std::env::var("THEMES_DIR").unwrap_or_else(|_| "templates/themes".into()),
        );

        let permissive_resolve = std::env::var("PERMISSIVE_RESOLVE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_token,
            domains_allowed,
            themes_dir,
            permissive_resolve,
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
