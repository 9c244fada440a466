//! Key-Value Store Port
//!
//! Contract for the backing store consumed by the lock and cache facades.
//! Every operation is a single atomic unit against the store.
//!
//! ## Implementations
//!
//! - **Redis**: distributed store; compare-and-delete runs as a server-side script
//! - **InMemory**: process-local store for tests and single-instance deployments

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value store with TTL and atomic conditional primitives
///
/// Implementations must be safe for concurrent use through a shared handle;
/// callers never synchronize access externally.
///
/// Connectivity failures are reported as
/// [`Error::StoreUnavailable`](crate::error::Error::StoreUnavailable), never as
/// a `false` or `None` result.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Set `key` to `value` expiring after `ttl`
    ///
    /// With `only_if_absent` the write happens only when the key does not
    /// currently exist. Returns `true` iff the key was written by this call.
    async fn conditional_set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
        only_if_absent: bool,
    ) -> Result<bool>;

    /// Read the value stored at `key`
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Delete `key`, returning `true` iff a key was removed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete `key` only if its current value equals `expected`
    ///
    /// The read, comparison and delete happen in one atomic step. Returns
    /// `true` iff the key was removed.
    async fn compare_and_delete(&self, key: &str, expected: &[u8]) -> Result<bool>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
