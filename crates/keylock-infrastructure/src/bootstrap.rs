//! Application context
//!
//! Composition root for the lock and cache services. One store handle is
//! created at startup and shared by every service built here.
//!
//! ```text
//! AppConfig → create_store → Arc<dyn KeyValueStore> ─┬→ LockService
//!                                                    ├→ CacheService<JsonSerializer>
//!                                                    └→ StoreHealthChecker
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = AppContext::init(ConfigLoader::new().load()?).await?;
//! let cancel = CancellationToken::new();
//!
//! if let Some(token) = context.locks().acquire("inventory:42", ttl, &cancel).await? {
//!     // ... critical section ...
//!     context.locks().release("inventory:42", token.as_str(), &cancel).await?;
//! }
//!
//! context.shutdown();
//! ```

use crate::config::{AppConfig, validate_app_config};
use crate::health::{HealthCheck, StoreHealthChecker};
use crate::store::create_store;
use keylock_application::{CacheService, LockService};
use keylock_domain::error::Result;
use keylock_domain::ports::{KeyValueStore, LockProvider};
use keylock_providers::serialization::JsonSerializer;
use std::sync::Arc;
use tracing::info;

/// Application context owning the shared store handle and the services built on it
pub struct AppContext {
    config: Arc<AppConfig>,
    store: Arc<dyn KeyValueStore>,
    locks: Arc<LockService>,
    cache: Arc<CacheService<JsonSerializer>>,
    health: StoreHealthChecker,
}

impl AppContext {
    /// Validate `config`, connect the configured store and build the services
    pub async fn init(config: AppConfig) -> Result<Self> {
        info!("Initializing application context");
        validate_app_config(&config)?;
        let store = create_store(&config.store).await?;
        Self::with_store(config, store)
    }

    /// Build the services on an already created store handle
    pub fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let namespace = config.store.namespace();

        let locks = Arc::new(LockService::new(Arc::clone(&store), namespace.clone()));
        let cache = Arc::new(CacheService::new(
            Arc::clone(&store),
            namespace.clone(),
            JsonSerializer::new(),
            config.cache.default_ttl(),
        )?);
        let health = StoreHealthChecker::new(Arc::clone(&store), namespace);

        info!(
            provider = store.provider_name(),
            prefix = config.store.namespace().prefix().unwrap_or(""),
            "Application context ready"
        );

        Ok(Self {
            config: Arc::new(config),
            store,
            locks,
            cache,
            health,
        })
    }

    /// Effective configuration
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Shared store handle
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Lock service
    pub fn locks(&self) -> Arc<LockService> {
        Arc::clone(&self.locks)
    }

    /// Cache service
    pub fn cache(&self) -> Arc<CacheService<JsonSerializer>> {
        Arc::clone(&self.cache)
    }

    /// Lock service behind the [`LockProvider`] port
    pub fn lock_provider(&self) -> Arc<dyn LockProvider> {
        self.locks.clone()
    }

    /// Probe the shared store
    pub async fn health_check(&self) -> HealthCheck {
        self.health.check().await
    }

    /// Release the context's references to the shared store
    ///
    /// Handles previously cloned out of the context stay valid until they are
    /// dropped.
    pub fn shutdown(self) {
        let provider = self.store.provider_name().to_string();
        drop(self);
        info!(provider = %provider, "Application context shut down");
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("provider", &self.store.provider_name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
