use crate::config::ServerConfig;
use catalog::ProductStore;
use std::sync::Arc;
use std::time::Instant;
use subtle::ConstantTimeEq;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product collection (shared across requests)
    pub store: Arc<ProductStore>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state, seeding the store if configured to
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_products {
            ProductStore::seeded()
        } else {
            ProductStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create server state around an existing store
    pub fn with_store(config: ServerConfig, store: ProductStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }

    /// Check a presented API key against the shared secret
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        key.as_bytes().ct_eq(self.config.api_key.as_bytes()).into()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_check() {
        let state = ServerState::new(ServerConfig::default());
        assert!(state.is_valid_api_key("12345"));
        assert!(!state.is_valid_api_key("1234"));
        assert!(!state.is_valid_api_key(""));
    }

    #[test]
    fn test_seeding_follows_config() {
        let seeded = ServerState::new(ServerConfig::default());
        assert_eq!(seeded.store.len(), 4);

        let empty = ServerState::new(ServerConfig {
            seed_products: false,
            ..Default::default()
        });
        assert!(empty.store.is_empty());
    }
}
