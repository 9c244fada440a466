//! In-memory key-value store
//!
//! Process-local store built on `DashMap`. Each operation runs under the
//! shard lock of its key, which makes set-if-absent and compare-and-delete
//! atomic with respect to every other operation on the same key.
//!
//! Expiry is lazy: an expired entry is treated as absent and dropped the next
//! time its key is touched, or by [`InMemoryStore::purge_expired`].
//!
//! ## Example
//!
//! ```ignore
//! use keylock_providers::store::InMemoryStore;
//!
//! let store = std::sync::Arc::new(InMemoryStore::new());
//! ```

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use keylock_domain::error::{Error, Result};
use keylock_domain::ports::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct StoredValue {
    value: Vec<u8>,
    expires_at: Instant,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// In-memory store provider
///
/// Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, StoredValue>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.is_live(now)).count()
    }

    /// Whether the store holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, v| v.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Remaining time to live of `key`, if it holds a live entry
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|v| v.is_live(now))
            .map(|v| v.expires_at - now)
    }

    fn expiry(ttl: Duration) -> Result<Instant> {
        Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| Error::invalid_argument(format!("ttl {ttl:?} is out of range")))
    }

    fn drop_if_expired(&self, key: &str, now: Instant) {
        self.entries.remove_if(key, |_, v| !v.is_live(now));
    }
}

/// Compare two byte strings in time independent of where they differ
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn conditional_set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
        only_if_absent: bool,
    ) -> Result<bool> {
        let expires_at = Self::expiry(ttl)?;
        let now = Instant::now();
        let stored = StoredValue {
            value: value.to_vec(),
            expires_at,
        };

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if only_if_absent && occupied.get().is_live(now) {
                    return Ok(false);
                }
                occupied.insert(stored);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(stored);
            }
        }
        Ok(true)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Instant::now();
        let lookup = self
            .entries
            .get(key)
            .map(|v| v.is_live(now).then(|| v.value.clone()));

        match lookup {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                self.drop_if_expired(key, now);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, v)| v.is_live(now)))
    }

    async fn compare_and_delete(&self, key: &str, expected: &[u8]) -> Result<bool> {
        let now = Instant::now();
        let removed = self
            .entries
            .remove_if(key, |_, v| {
                v.is_live(now) && constant_time_eq(&v.value, expected)
            })
            .is_some();

        if !removed {
            self.drop_if_expired(key, now);
        }
        Ok(removed)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}
