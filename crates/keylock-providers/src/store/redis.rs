//! Redis key-value store provider
//!
//! Distributed store implementation using Redis as the backend.
//! Suitable for multi-instance deployments.
//!
//! ## Features
//!
//! - `SET key value PX ttl [NX]` for conditional writes
//! - Server-side Lua script for atomic compare-and-delete
//! - One shared, auto-reconnecting multiplexed connection
//! - Per-call timeout; a timeout is reported as store unavailability
//!
//! ## Example
//!
//! ```ignore
//! use keylock_providers::store::RedisStore;
//! use std::time::Duration;
//!
//! let store = RedisStore::connect("redis://localhost:6379", Duration::from_secs(5)).await?;
//! ```

use crate::constants::REDIS_COMPARE_AND_DELETE_SCRIPT;
use async_trait::async_trait;
use keylock_domain::error::{Error, Result};
use keylock_domain::ports::KeyValueStore;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, RedisResult, Script, Value};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis store provider
///
/// Cloning is cheap and shares the underlying connection.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    compare_and_delete: Arc<Script>,
    operation_timeout: Duration,
    address: String,
}

impl RedisStore {
    /// Connect to Redis
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `operation_timeout` - Upper bound for connecting and for each store call
    pub async fn connect(connection_string: &str, operation_timeout: Duration) -> Result<Self> {
        let address = redact_url(connection_string);
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Invalid Redis URL {address}: {e}"), e)
        })?;

        let connection = match tokio::time::timeout(operation_timeout, ConnectionManager::new(client)).await
        {
            Ok(Ok(connection)) => connection,
            Ok(Err(e)) => return Err(map_redis_error("connect", e)),
            Err(_) => {
                return Err(Error::store_unavailable(format!(
                    "Redis connect to {address} timed out after {operation_timeout:?}"
                )));
            }
        };

        debug!(address = %address, "connected to Redis");
        Ok(Self {
            connection,
            compare_and_delete: Arc::new(Script::new(REDIS_COMPARE_AND_DELETE_SCRIPT)),
            operation_timeout,
            address,
        })
    }

    /// Redis server address, credentials removed
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Timeout applied to each store call
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Await a Redis call, bounded by the operation timeout
    async fn timed<T, F>(&self, operation: &'static str, future: F) -> Result<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, future).await {
            Ok(result) => result.map_err(|e| map_redis_error(operation, e)),
            Err(_) => Err(Error::store_unavailable(format!(
                "Redis {operation} timed out after {:?}",
                self.operation_timeout
            ))),
        }
    }
}

/// Classify a Redis error: transport failures become `StoreUnavailable`,
/// error replies become `Store`.
fn map_redis_error(operation: &str, error: RedisError) -> Error {
    let message = format!("Redis {operation} failed: {error}");
    if error.is_io_error()
        || error.is_timeout()
        || error.is_connection_dropped()
        || error.is_connection_refusal()
    {
        Error::store_unavailable_with_source(message, error)
    } else {
        Error::store_with_source(message, error)
    }
}

/// TTL in whole milliseconds, rounded up so a positive TTL never becomes 0
fn ttl_millis(ttl: Duration) -> u64 {
    let millis = ttl.as_nanos().div_ceil(1_000_000);
    u64::try_from(millis).unwrap_or(u64::MAX).max(1)
}

/// Strip `user:password@` from a connection URL
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}{}", &url[..scheme_end + 3], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn conditional_set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
        only_if_absent: bool,
    ) -> Result<bool> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("PX").arg(ttl_millis(ttl));
        if only_if_absent {
            cmd.arg("NX");
        }

        let mut conn = self.connection.clone();
        let reply: Value = self.timed("SET", cmd.query_async(&mut conn)).await?;

        // NX reports "not set" as a nil reply.
        Ok(!matches!(reply, Value::Nil))
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection.clone();
        self.timed("GET", conn.get::<_, Option<Vec<u8>>>(key)).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection.clone();
        let count: i64 = self.timed("DEL", conn.del::<_, i64>(key)).await?;
        Ok(count > 0)
    }

    async fn compare_and_delete(&self, key: &str, expected: &[u8]) -> Result<bool> {
        let mut conn = self.connection.clone();
        let mut invocation = self.compare_and_delete.key(key);
        invocation.arg(expected);

        let deleted: i64 = self
            .timed("compare-and-delete", invocation.invoke_async(&mut conn))
            .await?;
        Ok(deleted == 1)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("server", &self.address)
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}
