//! Lock Service Use Case
//!
//! Issues and releases mutually-exclusive, auto-expiring locks on a shared
//! key-value store.
//!
//! ## Protocol
//!
//! - **Acquire**: generate a fresh token, then one atomic
//!   set-if-absent of `lock_key -> token` with the requested TTL.
//! - **Release**: one atomic compare-and-delete of `lock_key` against the
//!   presented token.
//!
//! The service holds no in-process locks. Exclusion comes entirely from the
//! store's per-key atomicity, so any number of processes may share a lock key.

use crate::cancellation::run_cancellable;
use crate::token::RandomTokenGenerator;
use async_trait::async_trait;
use keylock_domain::error::{Error, Result};
use keylock_domain::ports::{KeyValueStore, LockProvider, TokenGenerator};
use keylock_domain::value_objects::{
    KeyNamespace, LockToken, require_non_blank, require_valid_ttl,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Lock service implementation backed by a [`KeyValueStore`]
pub struct LockService {
    store: Arc<dyn KeyValueStore>,
    namespace: KeyNamespace,
    tokens: Arc<dyn TokenGenerator>,
}

impl LockService {
    /// Create a lock service using random 128-bit tokens
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: KeyNamespace) -> Self {
        Self::with_token_generator(store, namespace, Arc::new(RandomTokenGenerator::new()))
    }

    /// Create a lock service with a custom token source
    pub fn with_token_generator(
        store: Arc<dyn KeyValueStore>,
        namespace: KeyNamespace,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            store,
            namespace,
            tokens,
        }
    }

    /// Key namespace used to derive lock keys
    pub fn namespace(&self) -> &KeyNamespace {
        &self.namespace
    }
}

#[async_trait]
impl LockProvider for LockService {
    async fn acquire(
        &self,
        key: &str,
        ttl: Duration,
        cancel: &CancellationToken,
    ) -> Result<Option<LockToken>> {
        require_non_blank(key, "lock key")?;
        require_valid_ttl(ttl)?;

        let lock_key = self.namespace.lock_key(key);
        let token = self.tokens.generate();

        let created = run_cancellable(
            "acquire",
            cancel,
            self.store
                .conditional_set(&lock_key, token.as_bytes(), ttl, true),
        )
        .await
        .inspect_err(|e| log_failure("acquire", &lock_key, e))?;

        if created {
            debug!(key = %lock_key, ttl = ?ttl, "lock acquired");
            Ok(Some(token))
        } else {
            debug!(key = %lock_key, "lock contended");
            Ok(None)
        }
    }

    async fn release(&self, key: &str, token: &str, cancel: &CancellationToken) -> Result<bool> {
        require_non_blank(key, "lock key")?;
        require_non_blank(token, "lock token")?;

        let lock_key = self.namespace.lock_key(key);

        let released = run_cancellable(
            "release",
            cancel,
            self.store.compare_and_delete(&lock_key, token.as_bytes()),
        )
        .await
        .inspect_err(|e| log_failure("release", &lock_key, e))?;

        if released {
            debug!(key = %lock_key, "lock released");
        } else {
            debug!(key = %lock_key, "release rejected: lock absent or owned by another token");
        }
        Ok(released)
    }
}

fn log_failure(operation: &str, lock_key: &str, error: &Error) {
    if !error.is_cancelled() {
        warn!(operation, key = %lock_key, error = %error, "lock store call failed");
    }
}

impl fmt::Debug for LockService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockService")
            .field("store", &self.store.provider_name())
            .field("namespace", &self.namespace)
            .finish()
    }
}
