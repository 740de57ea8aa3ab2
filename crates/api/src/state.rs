use std::sync::Arc;

use vitrine_core::theme::ThemeEntry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitrine_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Themes discovered under `config.themes_dir` at startup.
    pub themes: Arc<Vec<ThemeEntry>>,
}
