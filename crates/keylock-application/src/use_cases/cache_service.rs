//! Cache Service Use Case
//!
//! Typed get/set/remove over the shared store. Expiry is delegated to the
//! store's native TTL; keys are namespaced as `prefix:key` or bare `key`.

use crate::cancellation::run_cancellable;
use keylock_domain::error::Result;
use keylock_domain::ports::{KeyValueStore, PayloadSerializer};
use keylock_domain::value_objects::{KeyNamespace, require_non_blank, require_valid_ttl};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Cache Operation Statistics
///
/// Hit/miss counters for this process only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

#[derive(Debug, Default)]
struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cache facade backed by a [`KeyValueStore`] and a [`PayloadSerializer`]
pub struct CacheService<S> {
    store: Arc<dyn KeyValueStore>,
    namespace: KeyNamespace,
    serializer: S,
    default_ttl: Duration,
    stats: StatsCounters,
}

impl<S: PayloadSerializer> CacheService<S> {
    /// Create a cache service
    ///
    /// `default_ttl` applies to [`set`](Self::set) calls without an explicit TTL.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        namespace: KeyNamespace,
        serializer: S,
        default_ttl: Duration,
    ) -> Result<Self> {
        require_valid_ttl(default_ttl)?;
        Ok(Self {
            store,
            namespace,
            serializer,
            default_ttl,
            stats: StatsCounters::default(),
        })
    }

    /// Default expiration for entries set without a TTL
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Get a typed value from the cache
    ///
    /// Absent and empty payloads are reported as `None`.
    pub async fn get<T>(&self, key: &str, cancel: &CancellationToken) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        require_non_blank(key, "cache key")?;
        let cache_key = self.namespace.cache_key(key);

        let payload = run_cancellable("cache get", cancel, self.store.get(&cache_key)).await?;

        match payload {
            Some(bytes) if !bytes.is_empty() => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                trace!(key = %cache_key, bytes = bytes.len(), "cache hit");
                self.serializer.deserialize(&bytes).map(Some)
            }
            _ => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                trace!(key = %cache_key, "cache miss");
                Ok(None)
            }
        }
    }

    /// Set a typed value in the cache
    ///
    /// Overwrites any existing entry. `ttl = None` uses the default expiration.
    pub async fn set<T>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        require_non_blank(key, "cache key")?;
        let ttl = ttl.unwrap_or(self.default_ttl);
        require_valid_ttl(ttl)?;

        let cache_key = self.namespace.cache_key(key);
        let payload = self.serializer.serialize(value)?;

        run_cancellable(
            "cache set",
            cancel,
            self.store.conditional_set(&cache_key, &payload, ttl, false),
        )
        .await?;

        debug!(key = %cache_key, ttl = ?ttl, "cache entry stored");
        Ok(())
    }

    /// Remove a value from the cache
    ///
    /// Returns `true` if an entry was removed.
    pub async fn remove(&self, key: &str, cancel: &CancellationToken) -> Result<bool> {
        require_non_blank(key, "cache key")?;
        let cache_key = self.namespace.cache_key(key);

        let removed =
            run_cancellable("cache remove", cancel, self.store.delete(&cache_key)).await?;
        debug!(key = %cache_key, removed, "cache entry removed");
        Ok(removed)
    }

    /// Snapshot of the hit/miss counters
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.stats.hits.load(Ordering::Relaxed);
        let misses = self.stats.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        CacheStats {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl<S: PayloadSerializer> fmt::Debug for CacheService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheService")
            .field("store", &self.store.provider_name())
            .field("namespace", &self.namespace)
            .field("format", &self.serializer.format_name())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
