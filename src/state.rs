use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::UserStore;

/// The shared application state.
///
/// Cloned into every handler by Axum. Holds no per-request mutable data; all
/// mutation goes through the store.
#[derive(Clone)]
pub struct AppState {
    /// The user store. Opened at startup and injected here rather than
    /// reached through a global.
    pub store: Arc<dyn UserStore>,
    /// The application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> Self {
        Self { store, config: Arc::new(config) }
    }
}
