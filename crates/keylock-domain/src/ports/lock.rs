//! Distributed Lock Provider Port
//!
//! Defines the contract for distributed lock coordination services.

use crate::error::Result;
use crate::value_objects::LockToken;
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Distributed lock provider interface
///
/// Locks are non-blocking and non-reentrant: an acquire on a held lock
/// returns `None` immediately. There is no renewal; a lock that is never
/// released disappears when its TTL elapses.
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Acquire the lock on `key` for `ttl`
    ///
    /// Returns the ownership token, or `None` if the lock is currently held.
    async fn acquire(
        &self,
        key: &str,
        ttl: Duration,
        cancel: &CancellationToken,
    ) -> Result<Option<LockToken>>;

    /// Release the lock on `key` if `token` still owns it
    ///
    /// Returns `false` when the lock is absent, expired or owned by another
    /// token. That outcome is informational, not an error.
    async fn release(&self, key: &str, token: &str, cancel: &CancellationToken) -> Result<bool>;
}
