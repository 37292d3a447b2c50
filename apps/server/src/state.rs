//! Application state.

use std::sync::Arc;

use auth::JwtManager;
use contact_store::ContactStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: ContactStore> {
    /// Server configuration.
    pub config: Config,
    /// User and contact store.
    pub store: S,
    /// Session token manager.
    pub jwt_manager: JwtManager,
}

impl<S: ContactStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S, jwt_manager: JwtManager) -> Self {
        Self {
            config,
            store,
            jwt_manager,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config, store and token manager.
pub fn create_shared_state<S: ContactStore>(
    config: Config,
    store: S,
    jwt_manager: JwtManager,
) -> SharedState<S> {
    Arc::new(AppState::new(config, store, jwt_manager))
}
