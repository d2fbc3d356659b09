use std::sync::Arc;

use crate::common::CommonStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable (pool is a handle, the rest is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: catalog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Common display metadata, loaded at startup and reloadable on SIGHUP.
    pub common: Arc<CommonStore>,
}
