use std::sync::Arc;

use gamervault_db::DbPool;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`. Cloned per request,
/// so everything inside is a pool handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}
