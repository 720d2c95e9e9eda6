use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by the activity and user resources.
    pub pool: bucketlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
