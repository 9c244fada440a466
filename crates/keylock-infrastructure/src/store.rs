//! Store adapter selection
//!
//! Builds the single shared store handle from [`StoreConfig`].

use crate::config::{StoreConfig, StoreProvider};
use keylock_domain::error::{Error, Result};
use keylock_domain::ports::KeyValueStore;
use keylock_providers::store::{InMemoryStore, RedisStore};
use std::sync::Arc;
use tracing::info;

/// Create the store adapter selected by `config.provider`
///
/// The Redis adapter connects eagerly so an unreachable server or a malformed
/// URL fails here rather than on the first lock call.
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.provider {
        StoreProvider::Memory => Arc::new(InMemoryStore::new()),
        StoreProvider::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .ok_or_else(|| {
                    Error::configuration("store.redis_url is required for the Redis store")
                })?;
            Arc::new(RedisStore::connect(url, config.operation_timeout()).await?)
        }
    };

    info!(provider = store.provider_name(), "Store initialized");
    Ok(store)
}
