//! Configuration types

use crate::constants::{CACHE_DEFAULT_TTL_SECS, DEFAULT_LOG_LEVEL};
use keylock_domain::value_objects::KeyNamespace;
use keylock_providers::constants::STORE_DEFAULT_OPERATION_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Store providers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Process-local store
    #[default]
    Memory,
    /// Distributed store (Redis)
    Redis,
}

/// Backing store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Store provider
    pub provider: StoreProvider,

    /// Redis URL (for Redis provider)
    pub redis_url: Option<String>,

    /// Prefix prepended to every lock and cache key
    pub key_prefix: Option<String>,

    /// Upper bound for a single store call, in milliseconds
    pub operation_timeout_ms: u64,
}

impl StoreConfig {
    /// Key namespace derived from the configured prefix
    pub fn namespace(&self) -> KeyNamespace {
        KeyNamespace::from_option(self.key_prefix.clone())
    }

    /// Operation timeout as a `Duration`
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::Memory,
            redis_url: None,
            key_prefix: None,
            operation_timeout_ms: STORE_DEFAULT_OPERATION_TIMEOUT_MS,
        }
    }
}

/// Cache facade configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Expiration for entries set without an explicit TTL, in seconds
    pub default_ttl_secs: u64,
}

impl CacheConfig {
    /// Default TTL as a `Duration`
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Backing store
    pub store: StoreConfig,

    /// Cache facade
    pub cache: CacheConfig,

    /// Logging
    pub logging: LoggingConfig,
}
