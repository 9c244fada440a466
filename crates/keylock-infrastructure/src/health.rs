//! Store health probing
//!
//! A probe writes a short-lived entry, reads it back and deletes it. The
//! round trip exercises the same store handle the lock and cache services use.

use crate::constants::{HEALTH_CHECK_STORE, HEALTH_PROBE_SEGMENT, HEALTH_PROBE_TTL_SECS};
use crate::logging::log_health_check;
use keylock_application::RandomTokenGenerator;
use keylock_domain::ports::{KeyValueStore, TokenGenerator};
use keylock_domain::value_objects::KeyNamespace;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Store round trip succeeded
    Up,
    /// Store reachable but the probe did not read back as written
    Degraded,
    /// Store call failed
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the store is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    pub error: Option<String>,
}

impl HealthCheck {
    fn with_status<S: Into<String>>(name: S, status: HealthStatus, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error,
        }
    }

    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self::with_status(name, HealthStatus::Up, None)
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Down, error)
    }

    /// Create a degraded health check
    pub fn degraded<S: Into<String>>(name: S, details: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Degraded, details)
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

/// Probes the shared key-value store
#[derive(Clone)]
pub struct StoreHealthChecker {
    store: Arc<dyn KeyValueStore>,
    namespace: KeyNamespace,
    tokens: Arc<dyn TokenGenerator>,
}

impl StoreHealthChecker {
    /// Create a checker writing probes under `namespace`
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: KeyNamespace) -> Self {
        Self {
            store,
            namespace,
            tokens: Arc::new(RandomTokenGenerator::new()),
        }
    }

    /// Run one probe round trip
    pub async fn check(&self) -> HealthCheck {
        let start_time = Instant::now();
        let check = self.probe().await.with_response_time(start_time.elapsed());
        log_health_check(&check.name, check.status.is_healthy(), check.error.as_deref());
        check
    }

    async fn probe(&self) -> HealthCheck {
        let marker = self.tokens.generate();
        let key = self
            .namespace
            .cache_key(&format!("{HEALTH_PROBE_SEGMENT}:{marker}"));
        let ttl = Duration::from_secs(HEALTH_PROBE_TTL_SECS);

        match self
            .store
            .conditional_set(&key, marker.as_bytes(), ttl, false)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return HealthCheck::degraded(
                    HEALTH_CHECK_STORE,
                    Some("probe write was not applied".to_string()),
                );
            }
            Err(e) => return HealthCheck::failed(HEALTH_CHECK_STORE, Some(e.to_string())),
        }

        let read_back = match self.store.get(&key).await {
            Ok(value) => value,
            Err(e) => return HealthCheck::failed(HEALTH_CHECK_STORE, Some(e.to_string())),
        };

        if let Err(e) = self.store.delete(&key).await {
            return HealthCheck::failed(HEALTH_CHECK_STORE, Some(e.to_string()));
        }

        if read_back.as_deref() == Some(marker.as_bytes()) {
            HealthCheck::healthy(HEALTH_CHECK_STORE)
        } else {
            HealthCheck::degraded(
                HEALTH_CHECK_STORE,
                Some("probe read-back did not match the written value".to_string()),
            )
        }
    }
}

impl std::fmt::Debug for StoreHealthChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHealthChecker")
            .field("provider", &self.store.provider_name())
            .field("namespace", &self.namespace)
            .finish()
    }
}
